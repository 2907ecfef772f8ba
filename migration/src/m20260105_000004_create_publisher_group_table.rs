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
                    .table(PublisherGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(PublisherGroup::Id))
                    .col(integer(PublisherGroup::CongregationId))
                    .col(string(PublisherGroup::Name))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publisher_group_congregation_id")
                            .from(PublisherGroup::Table, PublisherGroup::CongregationId)
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
            .drop_table(Table::drop().table(PublisherGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PublisherGroup {
    Table,
    Id,
    CongregationId,
    Name,
}
