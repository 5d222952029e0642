use super::{courses, submissions, users};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{Iterable, Set};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod constraints {
    pub const UC_ENROLLMENTS_USER_COURSE: &str = "UC_enrollments_user_course";
    pub const FK_ENROLLMENTS_USER_ID: &str = "FK_enrollments_user_id";
    pub const FK_ENROLLMENTS_COURSE_ID: &str = "FK_enrollments_course_id";
}

pub mod constants {
    pub const DEFAULT_RATING: f64 = 5.0;
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Uuid,
    pub course_id: i32,
    pub date_enrolled: Date,
    pub mode: Mode,
    pub rating: f64,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(5))")]
pub enum Mode {
    #[default]
    #[serde(rename = "audit")]
    #[sea_orm(string_value = "audit")]
    Audit,
    #[serde(rename = "honor")]
    #[sea_orm(string_value = "honor")]
    Honor,
    #[serde(rename = "BETA")]
    #[sea_orm(string_value = "BETA")]
    Beta,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Audit => "Audit",
            Self::Honor => "Honor",
            Self::Beta => "BETA",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMode(pub String);

impl fmt::Display for UnknownMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown course mode: {:?}", self.0)
    }
}

impl std::error::Error for UnknownMode {}

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|mode| mode.to_value() == s)
            .ok_or_else(|| UnknownMode(s.to_owned()))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrollment for user {} for course {}",
            self.user_id, self.course_id
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
    Course,
    Submissions,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
            Self::Course => Entity::belongs_to(courses::Entity)
                .from(Column::CourseId)
                .to(courses::Column::Id)
                .into(),
            Self::Submissions => Entity::has_many(submissions::Entity).into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            date_enrolled: Set(Utc::now().date_naive()),
            mode: Set(Mode::default()),
            rating: Set(constants::DEFAULT_RATING),
            ..ActiveModelTrait::default()
        }
    }
}

impl Entity {
    #[inline]
    pub fn find_by_user_and_course(user_id: Uuid, course_id: i32) -> Select<Entity> {
        Self::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_values_are_case_sensitive() {
        assert_eq!("BETA".parse(), Ok(Mode::Beta));
        assert_eq!("audit".parse(), Ok(Mode::Audit));
        assert!("beta".parse::<Mode>().is_err());
        assert!("Audit".parse::<Mode>().is_err());
    }

    #[test]
    fn new_active_model_has_defaults() {
        let model = ActiveModel::new();
        assert_eq!(model.mode, Set(Mode::Audit));
        assert_eq!(model.rating, Set(5.0));
        assert!(model.id.is_not_set());
    }

    #[test]
    fn display_names_user_and_course() {
        let enrollment = Model {
            id: 3,
            user_id: Uuid::nil(),
            course_id: 7,
            date_enrolled: Date::from_ymd_opt(2024, 3, 1).unwrap(),
            mode: Mode::Honor,
            rating: 5.0,
        };
        assert_eq!(
            enrollment.to_string(),
            "Enrollment for user 00000000-0000-0000-0000-000000000000 for course 7"
        );
    }
}
