use entity::courses::{self, constants::DEFAULT_NAME};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(courses::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(courses::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Name)
                            .string_len(30)
                            .not_null()
                            .default(DEFAULT_NAME),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Image)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(courses::Column::Description)
                            .string_len(1000)
                            .not_null(),
                    )
                    .col(ColumnDef::new(courses::Column::PubDate).date().null())
                    .col(
                        ColumnDef::new(courses::Column::TotalEnrollment)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(courses::Entity).if_exists().to_owned())
            .await
    }
}
