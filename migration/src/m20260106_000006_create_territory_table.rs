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
                    .table(Territory::Table)
                    .if_not_exists()
                    .col(pk_auto(Territory::Id))
                    .col(integer(Territory::CongregationId))
                    .col(integer(Territory::Number))
                    .col(string(Territory::Name))
                    .col(text_null(Territory::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_territory_congregation_id")
                            .from(Territory::Table, Territory::CongregationId)
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
            .drop_table(Table::drop().table(Territory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Territory {
    Table,
    Id,
    CongregationId,
    Number,
    Name,
    Description,
}
