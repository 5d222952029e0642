use super::{course, user};
use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::{
    enrollments::{self, Mode},
    IdentityProvider,
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize)]
pub struct NewEnrollment {
    pub user_id: Uuid,
    pub course_id: i32,
    #[serde(default)]
    pub mode: Option<Mode>,
    #[serde(default)]
    pub rating: Option<f64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateEnrollment {
    pub mode: Option<Mode>,
    pub rating: Option<f64>,
}

/// Enrolls a user in a course. A user can be enrolled in a course once.
pub async fn enroll<C: ConnectionTrait>(
    db: &C,
    identity: &IdentityProvider,
    input: NewEnrollment,
) -> Result<enrollments::Model> {
    user::ensure_exists(db, identity, input.user_id).await?;
    course::get(db, input.course_id).await?;

    if is_enrolled(db, input.user_id, input.course_id).await? {
        tracing::warn!(user = %input.user_id, course = input.course_id, "duplicate enrollment");
        return Err(Error::Integrity(format!(
            "user {} is already enrolled in course {}",
            input.user_id, input.course_id
        )));
    }

    let mut enrollment = enrollments::ActiveModel::new();
    enrollment.user_id = Set(input.user_id);
    enrollment.course_id = Set(input.course_id);
    if let Some(mode) = input.mode {
        enrollment.mode = Set(mode);
    }
    if let Some(rating) = input.rating {
        enrollment.rating = Set(rating);
    }

    let enrollment = enrollment.insert(db).await?;
    tracing::debug!(
        enrollment = enrollment.id,
        user = %enrollment.user_id,
        course = enrollment.course_id,
        "enrolled user"
    );

    Ok(enrollment)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<enrollments::Model> {
    enrollments::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("enrollment", id))
}

pub async fn find<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    course_id: i32,
) -> Result<Option<enrollments::Model>> {
    Ok(enrollments::Entity::find_by_user_and_course(user_id, course_id)
        .one(db)
        .await?)
}

pub async fn is_enrolled<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
    course_id: i32,
) -> Result<bool> {
    let count = enrollments::Entity::find_by_user_and_course(user_id, course_id)
        .count(db)
        .await?;

    Ok(count > 0)
}

pub async fn list_for_user<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Vec<enrollments::Model>> {
    Ok(enrollments::Entity::find()
        .filter(enrollments::Column::UserId.eq(user_id))
        .order_by_asc(enrollments::Column::Id)
        .all(db)
        .await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateEnrollment,
) -> Result<enrollments::Model> {
    if patch.mode.is_none() && patch.rating.is_none() {
        return get(db, id).await;
    }

    let active_model = enrollments::ActiveModel {
        id: Set(id),
        mode: set_option(patch.mode),
        rating: set_option(patch.rating),
        ..Default::default()
    };

    updated(
        enrollments::Entity::update(active_model).exec(db).await,
        "enrollment",
        id,
    )
}

/// Deletes the enrollment and its submissions.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = enrollments::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "enrollment", id)
}
