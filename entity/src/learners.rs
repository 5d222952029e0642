use super::users;
use sea_orm::entity::prelude::*;
use sea_orm::{Iterable, Set};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub mod constraints {
    pub const FK_LEARNERS_USER_ID: &str = "FK_learners_user_id";
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "learners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: Uuid,
    pub occupation: Occupation,
    pub social_link: Option<String>,
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
#[serde(rename_all = "snake_case")]
pub enum Occupation {
    #[default]
    #[sea_orm(string_value = "student")]
    Student,
    #[sea_orm(string_value = "developer")]
    Developer,
    #[sea_orm(string_value = "data_scientist")]
    DataScientist,
    #[serde(rename = "dba")]
    #[sea_orm(string_value = "dba")]
    DatabaseAdmin,
}

impl Occupation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Developer => "Developer",
            Self::DataScientist => "Data Scientist",
            Self::DatabaseAdmin => "Database Admin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownOccupation(pub String);

impl fmt::Display for UnknownOccupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown occupation: {:?}", self.0)
    }
}

impl std::error::Error for UnknownOccupation {}

impl FromStr for Occupation {
    type Err = UnknownOccupation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|occupation| occupation.to_value() == s)
            .ok_or_else(|| UnknownOccupation(s.to_owned()))
    }
}

impl fmt::Display for Occupation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_value())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.user_id, self.occupation)
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::User => Entity::belongs_to(users::Entity)
                .from(Column::UserId)
                .to(users::Column::Id)
                .into(),
        }
    }
}

impl Related<users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            occupation: Set(Occupation::default()),
            ..ActiveModelTrait::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_values() {
        assert_eq!("student".parse(), Ok(Occupation::Student));
        assert_eq!("data_scientist".parse(), Ok(Occupation::DataScientist));
        assert_eq!("dba".parse(), Ok(Occupation::DatabaseAdmin));
    }

    #[test]
    fn rejects_labels_and_unknown_values() {
        assert!("Student".parse::<Occupation>().is_err());
        assert!("manager".parse::<Occupation>().is_err());
    }

    #[test]
    fn serde_matches_stored_value() {
        for occupation in Occupation::iter() {
            let json = serde_json::to_value(occupation).unwrap();
            assert_eq!(json, serde_json::Value::String(occupation.to_value()));
        }
    }

    #[test]
    fn display_shows_user_and_occupation() {
        let learner = Model {
            id: 1,
            user_id: Uuid::nil(),
            occupation: Occupation::DataScientist,
            social_link: None,
        };
        assert_eq!(
            learner.to_string(),
            "00000000-0000-0000-0000-000000000000,data_scientist"
        );
    }
}
