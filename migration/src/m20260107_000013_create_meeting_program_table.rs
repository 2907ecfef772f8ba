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
                    .table(MeetingProgram::Table)
                    .if_not_exists()
                    .col(pk_auto(MeetingProgram::Id))
                    .col(integer(MeetingProgram::CongregationId))
                    .col(date(MeetingProgram::WeekStart))
                    .col(integer_null(MeetingProgram::ChairmanId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_program_congregation_id")
                            .from(MeetingProgram::Table, MeetingProgram::CongregationId)
                            .to(Congregation::Table, Congregation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_meeting_program_chairman_id")
                            .from(MeetingProgram::Table, MeetingProgram::ChairmanId)
                            .to(Publisher::Table, Publisher::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MeetingProgram::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MeetingProgram {
    Table,
    Id,
    CongregationId,
    WeekStart,
    ChairmanId,
}
