use super::user;
use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::{courses, instructors, IdentityProvider};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, ModelTrait, QueryOrder,
    Set,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewInstructor {
    pub user_id: Uuid,
    #[serde(default)]
    pub full_time: Option<bool>,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub total_learners: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateInstructor {
    pub full_time: Option<bool>,
    #[validate(range(min = 0))]
    pub total_learners: Option<i32>,
}

impl UpdateInstructor {
    fn is_empty(&self) -> bool {
        self.full_time.is_none() && self.total_learners.is_none()
    }
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    identity: &IdentityProvider,
    input: NewInstructor,
) -> Result<instructors::Model> {
    input.validate()?;
    user::ensure_exists(db, identity, input.user_id).await?;

    let mut instructor = instructors::ActiveModel::new();
    instructor.user_id = Set(input.user_id);
    if let Some(full_time) = input.full_time {
        instructor.full_time = Set(full_time);
    }
    if let Some(total_learners) = input.total_learners {
        instructor.total_learners = Set(total_learners);
    }

    let instructor = instructor.insert(db).await?;
    tracing::debug!(instructor = instructor.id, user = %instructor.user_id, "created instructor");

    Ok(instructor)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<instructors::Model> {
    instructors::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("instructor", id))
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<instructors::Model>> {
    Ok(instructors::Entity::find()
        .order_by_asc(instructors::Column::Id)
        .all(db)
        .await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateInstructor,
) -> Result<instructors::Model> {
    patch.validate()?;

    // an update without columns is not valid sql
    if patch.is_empty() {
        return get(db, id).await;
    }

    let active_model = instructors::ActiveModel {
        id: Set(id),
        full_time: set_option(patch.full_time),
        total_learners: set_option(patch.total_learners),
        ..Default::default()
    };

    updated(
        instructors::Entity::update(active_model).exec(db).await,
        "instructor",
        id,
    )
}

/// Deletes the instructor and its course assignments.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = instructors::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "instructor", id)
}

/// Courses the instructor teaches.
pub async fn courses<C: ConnectionTrait>(db: &C, id: i32) -> Result<Vec<courses::Model>> {
    let instructor = get(db, id).await?;

    Ok(instructor
        .find_related(courses::Entity)
        .order_by_asc(courses::Column::Id)
        .all(db)
        .await?)
}
