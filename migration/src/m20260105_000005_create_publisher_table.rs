use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_congregation_table::Congregation,
    m20260105_000004_create_publisher_group_table::PublisherGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Publisher::Table)
                    .if_not_exists()
                    .col(pk_auto(Publisher::Id))
                    .col(integer(Publisher::CongregationId))
                    .col(integer_null(Publisher::GroupId))
                    .col(string(Publisher::Name))
                    .col(string_null(Publisher::Phone))
                    .col(string_null(Publisher::Email))
                    .col(string(Publisher::Privilege))
                    .col(boolean(Publisher::Pioneer))
                    .col(boolean(Publisher::Active))
                    .col(
                        timestamp(Publisher::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publisher_congregation_id")
                            .from(Publisher::Table, Publisher::CongregationId)
                            .to(Congregation::Table, Congregation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_publisher_group_id")
                            .from(Publisher::Table, Publisher::GroupId)
                            .to(PublisherGroup::Table, PublisherGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Publisher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Publisher {
    Table,
    Id,
    CongregationId,
    GroupId,
    Name,
    Phone,
    Email,
    Privilege,
    Pioneer,
    Active,
    CreatedAt,
}
