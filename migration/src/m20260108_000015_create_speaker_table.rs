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
                    .table(Speaker::Table)
                    .if_not_exists()
                    .col(pk_auto(Speaker::Id))
                    .col(integer(Speaker::CongregationId))
                    .col(string(Speaker::Name))
                    .col(string(Speaker::CongregationName))
                    .col(string_null(Speaker::Phone))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_speaker_congregation_id")
                            .from(Speaker::Table, Speaker::CongregationId)
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
            .drop_table(Table::drop().table(Speaker::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Speaker {
    Table,
    Id,
    CongregationId,
    Name,
    CongregationName,
    Phone,
}
