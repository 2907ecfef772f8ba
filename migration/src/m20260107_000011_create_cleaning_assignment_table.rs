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
                    .table(CleaningAssignment::Table)
                    .if_not_exists()
                    .col(pk_auto(CleaningAssignment::Id))
                    .col(integer(CleaningAssignment::CongregationId))
                    .col(date(CleaningAssignment::WeekStart))
                    .col(integer(CleaningAssignment::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cleaning_assignment_congregation_id")
                            .from(
                                CleaningAssignment::Table,
                                CleaningAssignment::CongregationId,
                            )
                            .to(Congregation::Table, Congregation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cleaning_assignment_group_id")
                            .from(CleaningAssignment::Table, CleaningAssignment::GroupId)
                            .to(PublisherGroup::Table, PublisherGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CleaningAssignment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CleaningAssignment {
    Table,
    Id,
    CongregationId,
    WeekStart,
    GroupId,
}
