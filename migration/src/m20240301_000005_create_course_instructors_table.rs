use entity::{
    course_instructors::{self, constraints::*},
    courses, instructors,
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
                    .table(course_instructors::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(course_instructors::Column::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(course_instructors::Column::InstructorId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name(PK_COURSE_INSTRUCTORS)
                            .col(course_instructors::Column::CourseId)
                            .col(course_instructors::Column::InstructorId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_INSTRUCTORS_COURSE_ID)
                            .from(
                                course_instructors::Entity,
                                course_instructors::Column::CourseId,
                            )
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COURSE_INSTRUCTORS_INSTRUCTOR_ID)
                            .from(
                                course_instructors::Entity,
                                course_instructors::Column::InstructorId,
                            )
                            .to(instructors::Entity, instructors::Column::Id)
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
                    .table(course_instructors::Entity)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}
