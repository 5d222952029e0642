use super::course;
use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::lessons;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewLesson {
    pub course_id: i32,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<i32>,
    #[serde(default)]
    pub content: String,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateLesson {
    #[validate(length(max = 200))]
    pub title: Option<String>,
    pub order: Option<i32>,
    pub content: Option<String>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewLesson) -> Result<lessons::Model> {
    input.validate()?;
    course::get(db, input.course_id).await?;

    let mut lesson = lessons::ActiveModel::new();
    lesson.course_id = Set(input.course_id);
    lesson.content = Set(input.content);
    if let Some(title) = input.title {
        lesson.title = Set(title);
    }
    if let Some(order) = input.order {
        lesson.order = Set(order);
    }

    let lesson = lesson.insert(db).await?;
    tracing::debug!(lesson = lesson.id, course = lesson.course_id, "created lesson");

    Ok(lesson)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<lessons::Model> {
    lessons::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("lesson", id))
}

/// Lessons of a course in display order.
pub async fn list_for_course<C: ConnectionTrait>(
    db: &C,
    course_id: i32,
) -> Result<Vec<lessons::Model>> {
    course::get(db, course_id).await?;

    Ok(lessons::Entity::find()
        .filter(lessons::Column::CourseId.eq(course_id))
        .order_by_asc(lessons::Column::Order)
        .order_by_asc(lessons::Column::Id)
        .all(db)
        .await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateLesson,
) -> Result<lessons::Model> {
    patch.validate()?;

    if patch.title.is_none() && patch.order.is_none() && patch.content.is_none() {
        return get(db, id).await;
    }

    let active_model = lessons::ActiveModel {
        id: Set(id),
        title: set_option(patch.title),
        order: set_option(patch.order),
        content: set_option(patch.content),
        ..Default::default()
    };

    updated(
        lessons::Entity::update(active_model).exec(db).await,
        "lesson",
        id,
    )
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = lessons::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "lesson", id)
}
