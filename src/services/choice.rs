use super::question;
use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::choices;
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use serde::Deserialize;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewChoice {
    #[serde(default)]
    pub question_id: Option<i32>,
    #[validate(length(max = 50))]
    pub choice_text: String,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateChoice {
    /// `Some(None)` detaches the choice from its question.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub question_id: Option<Option<i32>>,
    #[validate(length(max = 50))]
    pub choice_text: Option<String>,
    pub is_correct: Option<bool>,
}

pub async fn create<C: ConnectionTrait>(db: &C, input: NewChoice) -> Result<choices::Model> {
    input.validate()?;

    if let Some(question_id) = input.question_id {
        question::get(db, question_id).await?;
    }

    let mut choice = choices::ActiveModel::new();
    choice.question_id = Set(input.question_id);
    choice.choice_text = Set(input.choice_text);
    if let Some(is_correct) = input.is_correct {
        choice.is_correct = Set(is_correct);
    }

    let choice = choice.insert(db).await?;
    tracing::debug!(choice = choice.id, question = ?choice.question_id, "created choice");

    Ok(choice)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<choices::Model> {
    choices::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("choice", id))
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateChoice,
) -> Result<choices::Model> {
    patch.validate()?;

    if patch.question_id.is_none() && patch.choice_text.is_none() && patch.is_correct.is_none() {
        return get(db, id).await;
    }

    if let Some(Some(question_id)) = patch.question_id {
        question::get(db, question_id).await?;
    }

    let active_model = choices::ActiveModel {
        id: Set(id),
        question_id: set_option(patch.question_id),
        choice_text: set_option(patch.choice_text),
        is_correct: set_option(patch.is_correct),
    };

    updated(
        choices::Entity::update(active_model).exec(db).await,
        "choice",
        id,
    )
}

/// Deletes the choice and removes it from the submissions that selected it.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = choices::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "choice", id)
}
