use crate::utils::identity_foreign_key;
use entity::{
    learners::{self, constraints::*, Occupation},
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
                    .table(learners::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(learners::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(learners::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(learners::Column::Occupation)
                            .string_len(20)
                            .not_null()
                            .default(Occupation::default().to_value()),
                    )
                    .col(
                        ColumnDef::new(learners::Column::SocialLink)
                            .string_len(200)
                            .null(),
                    )
                    .foreign_key(&mut identity_foreign_key(
                        &self.identity,
                        FK_LEARNERS_USER_ID,
                        learners::Entity,
                        learners::Column::UserId,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(learners::Entity).if_exists().to_owned())
            .await
    }
}
