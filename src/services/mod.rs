//! Validated create, read, update and delete operations for every record type.
//!
//! Every operation takes the connection it runs on, so callers decide whether
//! it joins an open transaction.

pub mod choice;
pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod learner;
pub mod lesson;
pub mod question;
pub mod submission;
pub mod user;
