use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_congregation_table::Congregation,
    m20260105_000005_create_publisher_table::Publisher,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DutyAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(DutyAssignment::Id))
                    .col(integer(DutyAssignment::CongregationId))
                    .col(date(DutyAssignment::Date))
                    .col(string(DutyAssignment::Duty))
                    .col(integer(DutyAssignment::PublisherId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_duty_assignment_congregation_id")
                            .from(DutyAssignment::Table, DutyAssignment::CongregationId)
                            .to(Congregation::Table, Congregation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_duty_assignment_publisher_id")
                            .from(DutyAssignment::Table, DutyAssignment::PublisherId)
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
            .drop_table(Table::drop().table(DutyAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DutyAssignment {
    Table,
    Id,
    CongregationId,
    Date,
    Duty,
    PublisherId,
}
