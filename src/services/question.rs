use super::course;
use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::{choices, question_courses, questions};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};
use serde::Deserialize;
use std::collections::BTreeSet;
use validator::Validate;

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct NewQuestion {
    #[serde(default)]
    #[validate(length(min = 1, max = 500))]
    pub question_text: Option<String>,
    #[serde(default)]
    pub marks: Option<f64>,
    /// Courses the question is asked in.
    #[serde(default)]
    pub course_ids: Vec<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateQuestion {
    #[validate(length(min = 1, max = 500))]
    pub question_text: Option<String>,
    pub marks: Option<f64>,
}

/// Creates a question and links it to its courses in one transaction.
pub async fn create<C>(db: &C, input: NewQuestion) -> Result<questions::Model>
where
    C: ConnectionTrait + TransactionTrait,
{
    input.validate()?;

    let course_ids: BTreeSet<i32> = input.course_ids.into_iter().collect();

    let txn = db.begin().await?;

    for &course_id in &course_ids {
        course::get(&txn, course_id).await?;
    }

    let mut question = questions::ActiveModel::new();
    if let Some(question_text) = input.question_text {
        question.question_text = Set(question_text);
    }
    if let Some(marks) = input.marks {
        question.marks = Set(marks);
    }
    let question = question.insert(&txn).await?;

    if !course_ids.is_empty() {
        question_courses::Entity::insert_many(course_ids.iter().map(|&course_id| {
            question_courses::ActiveModel {
                course_id: Set(course_id),
                question_id: Set(question.id),
            }
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::debug!(question = question.id, courses = ?course_ids, "created question");

    Ok(question)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<questions::Model> {
    questions::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("question", id))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateQuestion,
) -> Result<questions::Model> {
    patch.validate()?;

    if patch.question_text.is_none() && patch.marks.is_none() {
        return get(db, id).await;
    }

    let active_model = questions::ActiveModel {
        id: Set(id),
        question_text: set_option(patch.question_text),
        marks: set_option(patch.marks),
    };

    updated(
        questions::Entity::update(active_model).exec(db).await,
        "question",
        id,
    )
}

/// Deletes the question. Its choices are kept and lose their question.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = questions::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "question", id)
}

pub async fn add_course<C: ConnectionTrait>(db: &C, question_id: i32, course_id: i32) -> Result {
    get(db, question_id).await?;
    course::get(db, course_id).await?;

    let existing = question_courses::Entity::find_by_id((course_id, question_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Ok(());
    }

    question_courses::Entity::insert(question_courses::ActiveModel {
        course_id: Set(course_id),
        question_id: Set(question_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

pub async fn remove_course<C: ConnectionTrait>(
    db: &C,
    question_id: i32,
    course_id: i32,
) -> Result {
    let res = question_courses::Entity::delete_by_id((course_id, question_id))
        .exec(db)
        .await?;

    if res.rows_affected == 0 {
        return Err(Error::not_found(
            "question course",
            format!("{question_id}/{course_id}"),
        ));
    }

    Ok(())
}

pub async fn choices<C: ConnectionTrait>(db: &C, id: i32) -> Result<Vec<choices::Model>> {
    get(db, id).await?;

    Ok(choices::Entity::find_by_question(id)
        .order_by_asc(choices::Column::Id)
        .all(db)
        .await?)
}
