mod catalog;
pub mod config;
pub mod error;
pub mod grading;
mod services;
mod utils;

pub use catalog::Catalog;
pub use config::Config;
pub use entity::{self, IdentityProvider};
pub use migration::Migrator;
pub use services::*;
