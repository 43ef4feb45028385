//! Migration: Create demo_user table referencing organisational_unit.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_organisational_unit_table::OrganisationalUnit;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DemoUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DemoUser::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DemoUser::Email).string().not_null())
                    .col(ColumnDef::new(DemoUser::FirstName).string().not_null())
                    .col(ColumnDef::new(DemoUser::SurName).string().not_null())
                    .col(ColumnDef::new(DemoUser::Gender).string().null())
                    .col(
                        ColumnDef::new(DemoUser::OrganisationalUnitId)
                            .big_integer()
                            .null(),
                    )
                    // Deleting a unit unassigns its users
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_demo_user_organisational_unit")
                            .from(DemoUser::Table, DemoUser::OrganisationalUnitId)
                            .to(OrganisationalUnit::Table, OrganisationalUnit::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_demo_user_organisational_unit_id")
                    .table(DemoUser::Table)
                    .col(DemoUser::OrganisationalUnitId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemoUser::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DemoUser {
    Table,
    Id,
    Email,
    FirstName,
    SurName,
    Gender,
    OrganisationalUnitId,
}
