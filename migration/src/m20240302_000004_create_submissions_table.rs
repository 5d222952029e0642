use entity::{
    enrollments,
    submissions::{self, constraints::*},
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(submissions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(submissions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::EnrollmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::DateSubmitted)
                            .date()
                            .not_null()
                            .extra("DEFAULT CURRENT_DATE"),
                    )
                    .col(
                        ColumnDef::new(submissions::Column::Time)
                            .time()
                            .not_null()
                            .extra("DEFAULT CURRENT_TIME"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSIONS_ENROLLMENT_ID)
                            .from(submissions::Entity, submissions::Column::EnrollmentId)
                            .to(enrollments::Entity, enrollments::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(submissions::Entity).if_exists().to_owned())
            .await
    }
}
