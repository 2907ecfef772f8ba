use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_congregation_table::Congregation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartLocation::Table)
                    .if_not_exists()
                    .col(pk_auto(CartLocation::Id))
                    .col(integer(CartLocation::CongregationId))
                    .col(string(CartLocation::Name))
                    .col(string_null(CartLocation::Address))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_location_congregation_id")
                            .from(CartLocation::Table, CartLocation::CongregationId)
                            .to(Congregation::Table, Congregation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartLocation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartLocation {
    Table,
    Id,
    CongregationId,
    Name,
    Address,
}
