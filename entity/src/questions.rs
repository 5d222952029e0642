use super::{choices, courses, question_courses};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constants {
    pub const DEFAULT_TEXT: &str = "This is a sample question.";
    pub const DEFAULT_MARKS: f64 = 1.0;
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_text: String,
    /// Points awarded for a correct answer.
    pub marks: f64,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.question_text)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Choices,
    QuestionCourses,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Choices => Entity::has_many(choices::Entity).into(),
            Self::QuestionCourses => Entity::has_many(question_courses::Entity).into(),
        }
    }
}

impl Related<choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Choices.def()
    }
}

impl Related<question_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionCourses.def()
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        question_courses::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(question_courses::Relation::Question.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            question_text: Set(constants::DEFAULT_TEXT.to_owned()),
            marks: Set(constants::DEFAULT_MARKS),
            ..ActiveModelTrait::default()
        }
    }
}
