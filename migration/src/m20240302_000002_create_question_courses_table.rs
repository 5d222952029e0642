use entity::{
    courses,
    question_courses::{self, constraints::*},
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
                    .table(question_courses::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(question_courses::Column::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(question_courses::Column::QuestionId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_QUESTION_COURSES)
                            .col(question_courses::Column::CourseId)
                            .col(question_courses::Column::QuestionId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUESTION_COURSES_COURSE_ID)
                            .from(
                                question_courses::Entity,
                                question_courses::Column::CourseId,
                            )
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_QUESTION_COURSES_QUESTION_ID)
                            .from(
                                question_courses::Entity,
                                question_courses::Column::QuestionId,
                            )
                            .to(questions::Entity, questions::Column::Id)
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
                    .table(question_courses::Entity)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
