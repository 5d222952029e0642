#![allow(dead_code)]

use course_catalog::{Catalog, Config, IdentityProvider};
use sea_orm::{ConnectionTrait, Statement};

// every in-memory connection is its own database
const DATABASE_URL: &str = "sqlite::memory:";

pub async fn setup() -> Catalog {
    setup_with(IdentityProvider::Local).await
}

pub async fn setup_with(identity: IdentityProvider) -> Catalog {
    let catalog = connect(identity).await;
    catalog
        .init_schema()
        .await
        .expect("failed to apply migrations");
    catalog
}

/// Connects without creating the schema.
pub async fn connect(identity: IdentityProvider) -> Catalog {
    let config = Config::new(DATABASE_URL)
        .with_max_connections(1)
        .with_identity(identity);

    Catalog::connect(config)
        .await
        .expect("failed to connect to database")
}

pub async fn execute(catalog: &Catalog, sql: &str) {
    let db = catalog.db();
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_owned(),
    ))
    .await
    .expect("failed to execute statement");
}
