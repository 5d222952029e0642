pub mod db;
pub mod fixtures;
pub mod macros;
pub mod prelude;
