use super::{questions, submission_choices, submissions};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constraints {
    pub const FK_CHOICES_QUESTION_ID: &str = "FK_choices_question_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "choices")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Null once the question has been deleted.
    pub question_id: Option<i32>,
    pub choice_text: String,
    pub is_correct: bool,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.choice_text)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Question,
    SubmissionChoices,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Question => Entity::belongs_to(questions::Entity)
                .from(Column::QuestionId)
                .to(questions::Column::Id)
                .into(),
            Self::SubmissionChoices => Entity::has_many(submission_choices::Entity).into(),
        }
    }
}

impl Related<questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl Related<submission_choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubmissionChoices.def()
    }
}

impl Related<submissions::Entity> for Entity {
    fn to() -> RelationDef {
        submission_choices::Relation::Submission.def()
    }

    fn via() -> Option<RelationDef> {
        Some(submission_choices::Relation::Choice.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            is_correct: Set(true),
            ..ActiveModelTrait::default()
        }
    }
}

impl Entity {
    #[inline]
    pub fn find_by_question(question_id: i32) -> Select<Entity> {
        Self::find().filter(Column::QuestionId.eq(question_id))
    }
}
