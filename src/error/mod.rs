mod db;

pub use db::*;

use entity::{enrollments::UnknownMode, learners::UnknownOccupation};
use sea_orm::DbErr;
use std::fmt::Display;
use thiserror::Error;
use validator::ValidationErrors;

pub mod codes {
    pub const CONSTRAINT_VIOLATION: &str = "E001";
    pub const NOT_FOUND: &str = "E002";
    pub const INTEGRITY: &str = "E003";
    pub const CONFIG: &str = "E004";
    pub const DATABASE: &str = "E005";
}

#[derive(Debug, Error)]
pub enum Error {
    /// A value does not fit its column: too long, out of range, not a member
    /// of the field's enumeration.
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    /// The store rejected the write because of a unique or foreign key
    /// constraint.
    #[error("integrity error: {0}")]
    Integrity(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Database(DbErr),
}

pub type Result<T = ()> = std::result::Result<T, Error>;

impl Error {
    #[inline]
    pub fn not_found(entity: &'static str, id: impl Display) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConstraintViolation(_) => codes::CONSTRAINT_VIOLATION,
            Self::NotFound { .. } => codes::NOT_FOUND,
            Self::Integrity(_) => codes::INTEGRITY,
            Self::Config(_) => codes::CONFIG,
            Self::Database(_) => codes::DATABASE,
        }
    }
}

impl From<DbErr> for Error {
    fn from(error: DbErr) -> Self {
        if error.unique_violation() || error.foreign_key_violation() {
            tracing::warn!("integrity error: {:?}", error);
            return Self::Integrity(error.to_string());
        }

        match error {
            DbErr::RecordNotFound(record) => Self::NotFound {
                entity: "record",
                id: record,
            },
            error => {
                tracing::error!("database error: {:?}", error);
                Self::Database(error)
            }
        }
    }
}

impl From<ValidationErrors> for Error {
    #[inline]
    fn from(errors: ValidationErrors) -> Self {
        Self::ConstraintViolation(errors.to_string())
    }
}

impl From<UnknownOccupation> for Error {
    #[inline]
    fn from(error: UnknownOccupation) -> Self {
        Self::ConstraintViolation(error.to_string())
    }
}

impl From<UnknownMode> for Error {
    #[inline]
    fn from(error: UnknownMode) -> Self {
        Self::ConstraintViolation(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::enrollments::Mode;

    #[test]
    fn not_found_message_names_the_record() {
        let error = Error::not_found("course", 42);
        assert_eq!(error.to_string(), "course 42 not found");
        assert_eq!(error.code(), codes::NOT_FOUND);
    }

    #[test]
    fn unknown_enum_value_is_a_constraint_violation() {
        let error: Error = "gamma".parse::<Mode>().unwrap_err().into();
        assert!(matches!(error, Error::ConstraintViolation(_)));
        assert_eq!(error.code(), codes::CONSTRAINT_VIOLATION);
    }

    #[test]
    fn record_not_found_maps_to_not_found() {
        let error: Error = DbErr::RecordNotFound("lesson".to_owned()).into();
        assert!(matches!(error, Error::NotFound { .. }));
    }

    #[test]
    fn other_database_errors_pass_through() {
        let error: Error = DbErr::Custom("boom".to_owned()).into();
        assert!(matches!(error, Error::Database(DbErr::Custom(_))));
        assert_eq!(error.code(), codes::DATABASE);
    }
}
