use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000008_create_cart_location_table::CartLocation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartSlot::Table)
                    .if_not_exists()
                    .col(pk_auto(CartSlot::Id))
                    .col(integer(CartSlot::LocationId))
                    .col(date(CartSlot::Date))
                    .col(string(CartSlot::StartTime))
                    .col(string(CartSlot::EndTime))
                    .col(boolean(CartSlot::Fixed))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_slot_location_id")
                            .from(CartSlot::Table, CartSlot::LocationId)
                            .to(CartLocation::Table, CartLocation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartSlot::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartSlot {
    Table,
    Id,
    LocationId,
    Date,
    StartTime,
    EndTime,
    Fixed,
}
