use entity::{
    courses,
    lessons::{self, constants::DEFAULT_TITLE, constraints::*},
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
                    .table(lessons::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(lessons::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(lessons::Column::Title)
                            .string_len(200)
                            .not_null()
                            .default(DEFAULT_TITLE),
                    )
                    .col(
                        ColumnDef::new(lessons::Column::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(lessons::Column::CourseId).integer().not_null())
                    .col(ColumnDef::new(lessons::Column::Content).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LESSONS_COURSE_ID)
                            .from(lessons::Entity, lessons::Column::CourseId)
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IX_LESSONS_COURSE_ORDER)
                    .table(lessons::Entity)
                    .col(lessons::Column::CourseId)
                    .col(lessons::Column::Order)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(lessons::Entity).if_exists().to_owned())
            .await
    }
}
