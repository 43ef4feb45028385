//! Migration: Create organisational_unit table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrganisationalUnit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganisationalUnit::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OrganisationalUnit::Name).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrganisationalUnit::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OrganisationalUnit {
    Table,
    Id,
    Name,
}
