use super::{choices, enrollments, submission_choices};
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod constraints {
    pub const FK_SUBMISSIONS_ENROLLMENT_ID: &str = "FK_submissions_enrollment_id";
}

/// A recorded quiz attempt. The timestamp columns are written once on insert.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub enrollment_id: i32,
    pub date_submitted: Date,
    pub time: Time,
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Submission posted on {} at {} for enrollment {}",
            self.date_submitted, self.time, self.enrollment_id
        )
    }
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Enrollment,
    SubmissionChoices,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::Enrollment => Entity::belongs_to(enrollments::Entity)
                .from(Column::EnrollmentId)
                .to(enrollments::Column::Id)
                .into(),
            Self::SubmissionChoices => Entity::has_many(submission_choices::Entity).into(),
        }
    }
}

impl Related<enrollments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<submission_choices::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SubmissionChoices.def()
    }
}

// Many-to-many relationship with the selected choices
impl Related<choices::Entity> for Entity {
    fn to() -> RelationDef {
        submission_choices::Relation::Choice.def()
    }

    fn via() -> Option<RelationDef> {
        Some(submission_choices::Relation::Submission.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        let now = Utc::now().naive_utc();

        Self {
            date_submitted: Set(now.date()),
            time: Set(now.time()),
            ..ActiveModelTrait::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_timestamp() {
        let submission = Model {
            id: 4,
            enrollment_id: 2,
            date_submitted: Date::from_ymd_opt(2024, 3, 1).unwrap(),
            time: Time::from_hms_opt(9, 30, 0).unwrap(),
        };
        assert_eq!(
            submission.to_string(),
            "Submission posted on 2024-03-01 at 09:30:00 for enrollment 2"
        );
    }
}
