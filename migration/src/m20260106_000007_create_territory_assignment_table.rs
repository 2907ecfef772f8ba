use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_publisher_table::Publisher,
    m20260106_000006_create_territory_table::Territory,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TerritoryAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(TerritoryAssignment::Id))
                    .col(integer(TerritoryAssignment::TerritoryId))
                    .col(integer(TerritoryAssignment::PublisherId))
                    .col(date(TerritoryAssignment::AssignedOn))
                    .col(date_null(TerritoryAssignment::ReturnedOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_territory_assignment_territory_id")
                            .from(
                                TerritoryAssignment::Table,
                                TerritoryAssignment::TerritoryId,
                            )
                            .to(Territory::Table, Territory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_territory_assignment_publisher_id")
                            .from(
                                TerritoryAssignment::Table,
                                TerritoryAssignment::PublisherId,
                            )
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
            .drop_table(Table::drop().table(TerritoryAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TerritoryAssignment {
    Table,
    Id,
    TerritoryId,
    PublisherId,
    AssignedOn,
    ReturnedOn,
}
