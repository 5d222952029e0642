mod orm;

pub use orm::*;
