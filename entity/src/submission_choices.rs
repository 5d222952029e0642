use super::{choices, submissions};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_SUBMISSION_CHOICES: &str = "PK_submission_choices";
    pub const FK_SUBMISSION_CHOICES_SUBMISSION_ID: &str = "FK_submission_choices_submission_id";
    pub const FK_SUBMISSION_CHOICES_CHOICE_ID: &str = "FK_submission_choices_choice_id";
}

/// Junction table for the choices selected in a submission
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submission_choices")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub submission_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub choice_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Submission,
    Choice,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Submission => Entity::belongs_to(submissions::Entity)
                .from(Column::SubmissionId)
                .to(submissions::Column::Id)
                .into(),
            Self::Choice => Entity::belongs_to(choices::Entity)
                .from(Column::ChoiceId)
                .to(choices::Column::Id)
                .into(),
        }
    }
}

impl Related<submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
