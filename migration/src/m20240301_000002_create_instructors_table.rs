use crate::utils::identity_foreign_key;
use entity::{
    instructors::{self, constraints::*},
    IdentityProvider,
};
use sea_orm_migration::prelude::*;

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
                    .table(instructors::Entity)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(instructors::Column::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(instructors::Column::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(instructors::Column::FullTime)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(instructors::Column::TotalLearners)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(Expr::col(instructors::Column::TotalLearners).gte(0)),
                    )
                    .foreign_key(&mut identity_foreign_key(
                        &self.identity,
                        FK_INSTRUCTORS_USER_ID,
                        instructors::Entity,
                        instructors::Column::UserId,
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(instructors::Entity).if_exists().to_owned())
            .await
    }
}
