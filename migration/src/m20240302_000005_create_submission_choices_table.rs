use entity::{
    choices,
    submission_choices::{self, constraints::*},
    submissions,
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
                    .table(submission_choices::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(submission_choices::Column::SubmissionId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(submission_choices::Column::ChoiceId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_SUBMISSION_CHOICES)
                            .col(submission_choices::Column::SubmissionId)
                            .col(submission_choices::Column::ChoiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSION_CHOICES_SUBMISSION_ID)
                            .from(
                                submission_choices::Entity,
                                submission_choices::Column::SubmissionId,
                            )
                            .to(submissions::Entity, submissions::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SUBMISSION_CHOICES_CHOICE_ID)
                            .from(
                                submission_choices::Entity,
                                submission_choices::Column::ChoiceId,
                            )
                            .to(choices::Entity, choices::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(submission_choices::Entity)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
