use super::courses;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constraints {
    pub const FK_LESSONS_COURSE_ID: &str = "FK_lessons_course_id";
    pub const IX_LESSONS_COURSE_ORDER: &str = "IX_lessons_course_order";
}

pub mod constants {
    pub const DEFAULT_TITLE: &str = "Lesson number X";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lessons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    /// Position of the lesson inside its course, ascending.
    pub order: i32,
    pub course_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Course => Entity::belongs_to(courses::Entity)
                .from(Column::CourseId)
                .to(courses::Column::Id)
                .into(),
        }
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            title: Set(constants::DEFAULT_TITLE.to_owned()),
            order: Set(0),
            ..ActiveModelTrait::default()
        }
    }
}
