use super::{courses, questions};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_QUESTION_COURSES: &str = "PK_question_courses";
    pub const FK_QUESTION_COURSES_COURSE_ID: &str = "FK_question_courses_course_id";
    pub const FK_QUESTION_COURSES_QUESTION_ID: &str = "FK_question_courses_question_id";
}

/// Junction table for many-to-many relationship between questions and courses
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question_courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub question_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
    Question,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Course => Entity::belongs_to(courses::Entity)
                .from(Column::CourseId)
                .to(courses::Column::Id)
                .into(),
            Self::Question => Entity::belongs_to(questions::Entity)
                .from(Column::QuestionId)
                .to(questions::Column::Id)
                .into(),
        }
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
