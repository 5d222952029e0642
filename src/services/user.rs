use crate::{
    error::{Error, Result},
    utils::deleted,
};
use entity::{users, IdentityProvider};
use sea_orm::{
    sea_query::{Alias, Expr, Query},
    ActiveModelTrait, ConnectionTrait, EntityTrait, Set,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct NewUser {
    /// Issued by the identity provider. A fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 150))]
    pub username: String,
}

/// Creates an identity in the local store.
pub async fn create<C: ConnectionTrait>(
    db: &C,
    identity: &IdentityProvider,
    input: NewUser,
) -> Result<users::Model> {
    if !identity.is_local() {
        return Err(Error::Config(
            "users are managed by an external identity provider".to_owned(),
        ));
    }

    input.validate()?;

    let user = users::ActiveModel {
        id: Set(input.id.unwrap_or_else(Uuid::new_v4)),
        username: Set(input.username),
    }
    .insert(db)
    .await?;

    tracing::debug!(user = %user.id, "created user");

    Ok(user)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<users::Model> {
    users::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("user", id))
}

/// Removes a local identity. Instructors, learners and enrollments of the user
/// go with it.
pub async fn delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result {
    let res = users::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "user", id)
}

/// Whether the identity provider knows `id`.
pub async fn exists<C: ConnectionTrait>(
    db: &C,
    identity: &IdentityProvider,
    id: Uuid,
) -> Result<bool> {
    let query = Query::select()
        .expr(Expr::val(1))
        .from(Alias::new(identity.table()))
        .and_where(Expr::col(Alias::new(identity.id_column())).eq(id))
        .limit(1)
        .to_owned();

    let row = db
        .query_one(db.get_database_backend().build(&query))
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn ensure_exists<C: ConnectionTrait>(
    db: &C,
    identity: &IdentityProvider,
    id: Uuid,
) -> Result {
    if !exists(db, identity, id).await? {
        return Err(Error::not_found("user", id));
    }

    Ok(())
}
