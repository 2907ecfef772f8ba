use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_publisher_table::Publisher,
    m20260106_000009_create_cart_slot_table::CartSlot,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(CartAssignment::Id))
                    .col(integer(CartAssignment::SlotId))
                    .col(integer(CartAssignment::PublisherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_assignment_slot_id")
                            .from(CartAssignment::Table, CartAssignment::SlotId)
                            .to(CartSlot::Table, CartSlot::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_assignment_publisher_id")
                            .from(CartAssignment::Table, CartAssignment::PublisherId)
                            .to(Publisher::Table, Publisher::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartAssignment {
    Table,
    Id,
    SlotId,
    PublisherId,
}
