use entity::{
    choices::{self, constraints::*},
    questions,
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
                    .table(choices::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(choices::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(choices::Column::QuestionId).integer().null())
                    .col(
                        ColumnDef::new(choices::Column::ChoiceText)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(choices::Column::IsCorrect)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    // choices outlive their question
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHOICES_QUESTION_ID)
                            .from(choices::Entity, choices::Column::QuestionId)
                            .to(questions::Entity, questions::Column::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(choices::Entity).if_exists().to_owned())
            .await
    }
}
