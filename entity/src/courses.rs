use super::{
    course_instructors, enrollments, instructors, lessons, question_courses, questions, users,
};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constants {
    pub const DEFAULT_NAME: &str = "online course";
    pub const IMAGE_UPLOAD_DIR: &str = "course_images/";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Path of the image inside the asset store, relative to its root.
    pub image: String,
    pub description: String,
    pub pub_date: Option<Date>,
    pub total_enrollment: i32,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Lessons,
    Enrollments,
    CourseInstructors,
    QuestionCourses,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Lessons => Entity::has_many(lessons::Entity).into(),
            Self::Enrollments => Entity::has_many(enrollments::Entity).into(),
            Self::CourseInstructors => Entity::has_many(course_instructors::Entity).into(),
            Self::QuestionCourses => Entity::has_many(question_courses::Entity).into(),
        }
    }
}

impl Related<lessons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl Related<enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollments.def()
    }
}

impl Related<course_instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstructors.def()
    }
}

impl Related<question_courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::QuestionCourses.def()
    }
}

// Many-to-many relationship with instructors
impl Related<instructors::Entity> for Entity {
    fn to() -> RelationDef {
        course_instructors::Relation::Instructor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(course_instructors::Relation::Course.def().rev())
    }
}

// Many-to-many relationship with questions
impl Related<questions::Entity> for Entity {
    fn to() -> RelationDef {
        question_courses::Relation::Question.def()
    }

    fn via() -> Option<RelationDef> {
        Some(question_courses::Relation::Course.def().rev())
    }
}

// Enrolled users, through the enrollments table
impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        enrollments::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(enrollments::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            name: Set(constants::DEFAULT_NAME.to_owned()),
            total_enrollment: Set(0),
            ..ActiveModelTrait::default()
        }
    }
}
