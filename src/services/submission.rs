use super::enrollment;
use crate::{
    error::{Error, Result},
    utils::deleted,
};
use entity::{choices, submission_choices, submissions};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use std::collections::BTreeSet;

/// Records a quiz attempt with the selected choices in one transaction.
///
/// Duplicate choice ids are recorded once. Every choice has to exist.
pub async fn submit<C, I>(db: &C, enrollment_id: i32, choice_ids: I) -> Result<submissions::Model>
where
    C: ConnectionTrait + TransactionTrait,
    I: IntoIterator<Item = i32>,
{
    let choice_ids: BTreeSet<i32> = choice_ids.into_iter().collect();

    let txn = db.begin().await?;

    enrollment::get(&txn, enrollment_id).await?;

    if !choice_ids.is_empty() {
        let found: BTreeSet<i32> = choices::Entity::find()
            .select_only()
            .column(choices::Column::Id)
            .filter(choices::Column::Id.is_in(choice_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(&txn)
            .await?
            .into_iter()
            .collect();

        if let Some(missing) = choice_ids.difference(&found).next() {
            return Err(Error::not_found("choice", missing));
        }
    }

    let mut submission = submissions::ActiveModel::new();
    submission.enrollment_id = Set(enrollment_id);
    let submission = submission.insert(&txn).await?;

    if !choice_ids.is_empty() {
        submission_choices::Entity::insert_many(choice_ids.iter().map(|&choice_id| {
            submission_choices::ActiveModel {
                submission_id: Set(submission.id),
                choice_id: Set(choice_id),
            }
        }))
        .exec_without_returning(&txn)
        .await?;
    }

    txn.commit().await?;

    tracing::debug!(
        submission = submission.id,
        enrollment = enrollment_id,
        choices = choice_ids.len(),
        "recorded submission"
    );

    Ok(submission)
}

pub async fn get<C: ConnectionTrait>(db: &C, id: i32) -> Result<submissions::Model> {
    submissions::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("submission", id))
}

/// Choices selected in the submission.
pub async fn choices<C: ConnectionTrait>(db: &C, id: i32) -> Result<Vec<choices::Model>> {
    let submission = get(db, id).await?;

    Ok(submission
        .find_related(choices::Entity)
        .order_by_asc(choices::Column::Id)
        .all(db)
        .await?)
}

pub async fn list_for_enrollment<C: ConnectionTrait>(
    db: &C,
    enrollment_id: i32,
) -> Result<Vec<submissions::Model>> {
    enrollment::get(db, enrollment_id).await?;

    Ok(submissions::Entity::find()
        .filter(submissions::Column::EnrollmentId.eq(enrollment_id))
        .order_by_asc(submissions::Column::Id)
        .all(db)
        .await?)
}

pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result {
    let res = submissions::Entity::delete_by_id(id).exec(db).await?;
    deleted(res, "submission", id)
}
