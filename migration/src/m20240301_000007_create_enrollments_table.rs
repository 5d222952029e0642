use crate::utils::identity_foreign_key;
use entity::{
    courses,
    enrollments::{self, constants::DEFAULT_RATING, constraints::*, Mode},
    IdentityProvider,
};
use sea_orm_migration::{prelude::*, sea_orm::ActiveEnum};

#[derive(DeriveMigrationName)]
pub struct Migration {
    identity: IdentityProvider,
}

impl Migration {
    pub fn new(identity: IdentityProvider) -> Self {
        Self { identity }
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(enrollments::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(enrollments::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(enrollments::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(enrollments::Column::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::DateEnrolled)
                            .date()
                            .not_null()
                            .extra("DEFAULT CURRENT_DATE"),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::Mode)
                            .string_len(5)
                            .not_null()
                            .default(Mode::default().to_value()),
                    )
                    .col(
                        ColumnDef::new(enrollments::Column::Rating)
                            .double()
                            .not_null()
                            .default(DEFAULT_RATING),
                    )
                    .index(
                        Index::create()
                            .name(UC_ENROLLMENTS_USER_COURSE)
                            .col(enrollments::Column::UserId)
                            .col(enrollments::Column::CourseId)
                            .unique(),
                    )
                    .foreign_key(&mut identity_foreign_key(
                        &self.identity,
                        FK_ENROLLMENTS_USER_ID,
                        enrollments::Entity,
                        enrollments::Column::UserId,
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ENROLLMENTS_COURSE_ID)
                            .from(enrollments::Entity, enrollments::Column::CourseId)
                            .to(courses::Entity, courses::Column::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(enrollments::Entity).if_exists().to_owned())
            .await
    }
}
