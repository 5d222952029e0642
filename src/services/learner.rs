use super::user;
use crate::{
    error::{Error, Result},
    utils::{deleted, set_option, updated},
};
use entity::{
    learners::{self, Occupation},
    IdentityProvider,
};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewLearner {
    pub user_id: Uuid,
    #[serde(default)]
    pub occupation: Option<Occupation>,
    #[serde(default)]
    #[validate(url, length(max = 200))]
    pub social_link: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateLearner {
    pub occupation: Option<Occupation>,
    /// `Some(None)` clears the link.
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[validate(url, length(max = 200))]
    pub social_link: Option<Option<String>>,
}

pub async fn create<C: ConnectionTrait>(
    db: &C,
    identity: &IdentityProvider,
    input: NewLearner,
) -> Result<learners::Model> {
    input.validate()?;
    user::ensure_exists(db, identity, input.user_id).await?;

    let mut learner = learners::ActiveModel::new();
    learner.user_id = Set(input.user_id);
    learner.social_link = Set(input.social_link);
    if let Some(occupation) = input.occupation {
        learner.occupation = Set(occupation);
    }

    let learner = learner.insert(db).await?;
    tracing::debug!(learner = learner.id, user = %learner.user_id, "created learner");

    Ok(learner)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<learners::Model> {
    learners::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("learner", id))
}

/// The learner profile of a user, the oldest one if there are several.
pub async fn find_by_user<C: ConnectionTrait>(
    db: &C,
    user_id: Uuid,
) -> Result<Option<learners::Model>> {
    Ok(learners::Entity::find()
        .filter(learners::Column::UserId.eq(user_id))
        .order_by_asc(learners::Column::Id)
        .one(db)
        .await?)
}

pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    patch: UpdateLearner,
) -> Result<learners::Model> {
    patch.validate()?;

    if patch.occupation.is_none() && patch.social_link.is_none() {
        return get(db, id).await;
    }

    let active_model = learners::ActiveModel {
        id: Set(id),
        occupation: set_option(patch.occupation),
        social_link: set_option(patch.social_link),
        ..Default::default()
    };

    updated(
        learners::Entity::update(active_model).exec(db).await,
        "learner",
        id,
    )
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = learners::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "learner", id)
}
