use crate::{config::Config, error::Result};
use entity::IdentityProvider;
use migration::Migrator;
use sea_orm::{Database, DbConn};

/// A connection to the catalog database together with the configuration it
/// was opened with.
#[derive(Clone, Debug)]
pub struct Catalog {
    db: DbConn,
    config: Config,
}

impl Catalog {
    pub async fn connect(config: Config) -> Result<Self> {
        tracing::info!("Trying to connect to database");

        let db = Database::connect(config.connect_options()).await?;

        tracing::info!("Connected to database");

        Ok(Self { db, config })
    }

    /// Wraps a connection opened elsewhere, e.g. a test database.
    pub fn with_database(db: DbConn, config: Config) -> Self {
        Self { db, config }
    }

    #[inline]
    pub fn db(&self) -> &DbConn {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn identity(&self) -> &IdentityProvider {
        &self.config.identity
    }

    pub fn migrator(&self) -> Migrator {
        Migrator::new(self.config.identity.clone())
    }

    pub async fn init_schema(&self) -> Result {
        self.migrator().up(&self.db).await?;
        Ok(())
    }

    pub async fn drop_schema(&self) -> Result {
        self.migrator().down(&self.db).await?;
        Ok(())
    }

    pub async fn reset_schema(&self) -> Result {
        self.migrator().fresh(&self.db).await?;
        Ok(())
    }
}
