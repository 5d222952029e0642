#![allow(unused_imports)]

pub(crate) use super::macros::*;
pub use super::{db, fixtures};
pub use assert_json_diff::{assert_json_eq, assert_json_include};
pub use course_catalog::{
    choice, course, enrollment, error::Error, grading, instructor, learner, lesson, question,
    submission, user, Catalog, IdentityProvider,
};
pub use entity::{enrollments::Mode, learners::Occupation};
pub use serde_json::{json, Value};
pub use serial_test::serial;
pub use uuid::Uuid;
