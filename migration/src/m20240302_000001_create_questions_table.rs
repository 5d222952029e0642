use entity::questions::{
    self,
    constants::{DEFAULT_MARKS, DEFAULT_TEXT},
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
                    .table(questions::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(questions::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(questions::Column::QuestionText)
                            .string_len(500)
                            .not_null()
                            .default(DEFAULT_TEXT),
                    )
                    .col(
                        ColumnDef::new(questions::Column::Marks)
                            .double()
                            .not_null()
                            .default(DEFAULT_MARKS),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(questions::Entity).if_exists().to_owned())
            .await
    }
}
