pub mod choices;
pub mod course_instructors;
pub mod courses;
pub mod enrollments;
pub mod identity;
pub mod instructors;
pub mod learners;
pub mod lessons;
pub mod question_courses;
pub mod questions;
pub mod submission_choices;
pub mod submissions;
pub mod users;

pub use identity::IdentityProvider;
