mod utils;

pub use entity::IdentityProvider;
pub use sea_orm_migration::prelude::*;

use sea_orm_migration::sea_orm::DbConn;

mod m20240301_000001_create_users_table;
mod m20240301_000002_create_instructors_table;
mod m20240301_000003_create_learners_table;
mod m20240301_000004_create_courses_table;
mod m20240301_000005_create_course_instructors_table;
mod m20240301_000006_create_lessons_table;
mod m20240301_000007_create_enrollments_table;
mod m20240302_000001_create_questions_table;
mod m20240302_000002_create_question_courses_table;
mod m20240302_000003_create_choices_table;
mod m20240302_000004_create_submissions_table;
mod m20240302_000005_create_submission_choices_table;

/// Creates and removes the catalog tables.
///
/// The identity provider decides whether a `users` table is part of the
/// schema and which table the user foreign keys point at, so it has to be
/// known before any statement is built.
#[derive(Clone, Debug)]
pub struct Migrator {
    identity: IdentityProvider,
}

impl Migrator {
    pub fn new(identity: IdentityProvider) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &IdentityProvider {
        &self.identity
    }

    /// Migrations in the order they have to be applied.
    pub fn migrations(&self) -> Vec<Box<dyn MigrationTrait>> {
        let identity = &self.identity;
        let mut migrations: Vec<Box<dyn MigrationTrait>> = Vec::new();

        if identity.is_local() {
            migrations.push(Box::new(m20240301_000001_create_users_table::Migration));
        }

        migrations.extend([
            Box::new(m20240301_000002_create_instructors_table::Migration::new(
                identity.clone(),
            )) as Box<dyn MigrationTrait>,
            Box::new(m20240301_000003_create_learners_table::Migration::new(
                identity.clone(),
            )),
            Box::new(m20240301_000004_create_courses_table::Migration),
            Box::new(m20240301_000005_create_course_instructors_table::Migration),
            Box::new(m20240301_000006_create_lessons_table::Migration),
            Box::new(m20240301_000007_create_enrollments_table::Migration::new(
                identity.clone(),
            )),
            Box::new(m20240302_000001_create_questions_table::Migration),
            Box::new(m20240302_000002_create_question_courses_table::Migration),
            Box::new(m20240302_000003_create_choices_table::Migration),
            Box::new(m20240302_000004_create_submissions_table::Migration),
            Box::new(m20240302_000005_create_submission_choices_table::Migration),
        ]);

        migrations
    }

    /// Applies every migration. Tables that already exist are left alone.
    pub async fn up(&self, db: &DbConn) -> Result<(), DbErr> {
        let manager = SchemaManager::new(db);

        for migration in self.migrations() {
            tracing::info!(migration = migration.name(), "applying migration");
            migration.up(&manager).await?;
        }

        Ok(())
    }

    /// Reverts every migration, newest first.
    pub async fn down(&self, db: &DbConn) -> Result<(), DbErr> {
        let manager = SchemaManager::new(db);

        for migration in self.migrations().into_iter().rev() {
            tracing::info!(migration = migration.name(), "reverting migration");
            migration.down(&manager).await?;
        }

        Ok(())
    }

    /// Drops and recreates the whole catalog schema.
    pub async fn fresh(&self, db: &DbConn) -> Result<(), DbErr> {
        self.down(db).await?;
        self.up(db).await
    }
}
