use super::{courses, instructors};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

pub mod constraints {
    pub const PK_COURSE_INSTRUCTORS: &str = "PK_course_instructors";
    pub const FK_COURSE_INSTRUCTORS_COURSE_ID: &str = "FK_course_instructors_course_id";
    pub const FK_COURSE_INSTRUCTORS_INSTRUCTOR_ID: &str = "FK_course_instructors_instructor_id";
}

/// Junction table for many-to-many relationship between courses and instructors
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "course_instructors")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub instructor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Course,
    Instructor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Course => Entity::belongs_to(courses::Entity)
                .from(Column::CourseId)
                .to(courses::Column::Id)
                .into(),
            Self::Instructor => Entity::belongs_to(instructors::Entity)
                .from(Column::InstructorId)
                .to(instructors::Column::Id)
                .into(),
        }
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
