use super::{course_instructors, courses, users};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constraints {
    pub const FK_INSTRUCTORS_USER_ID: &str = "FK_instructors_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Uuid,
    pub full_time: bool,
    pub total_learners: i32,
}

/// Usernames live with the identity provider, so instructors show their user id.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_id)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    CourseInstructors,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::CourseInstructors => Entity::has_many(course_instructors::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<course_instructors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseInstructors.def()
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        course_instructors::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(course_instructors::Relation::Instructor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            full_time: Set(true),
            total_learners: Set(0),
            ..ActiveModelTrait::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_user_id() {
        let instructor = Model {
            id: 1,
            user_id: Uuid::nil(),
            full_time: true,
            total_learners: 0,
        };
        assert_eq!(
            instructor.to_string(),
            "00000000-0000-0000-0000-000000000000"
        );
    }
}
