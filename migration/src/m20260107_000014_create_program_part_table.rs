use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_publisher_table::Publisher,
    m20260107_000013_create_meeting_program_table::MeetingProgram,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgramPart::Table)
                    .if_not_exists()
                    .col(pk_auto(ProgramPart::Id))
                    .col(integer(ProgramPart::ProgramId))
                    .col(string(ProgramPart::Section))
                    .col(string(ProgramPart::Title))
                    .col(integer(ProgramPart::DurationMinutes))
                    .col(integer_null(ProgramPart::AssigneeId))
                    .col(integer_null(ProgramPart::AssistantId))
                    .col(integer(ProgramPart::Position))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_program_part_program_id")
                            .from(ProgramPart::Table, ProgramPart::ProgramId)
                            .to(MeetingProgram::Table, MeetingProgram::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_program_part_assignee_id")
                            .from(ProgramPart::Table, ProgramPart::AssigneeId)
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
            .drop_table(Table::drop().table(ProgramPart::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProgramPart {
    Table,
    Id,
    ProgramId,
    Section,
    Title,
    DurationMinutes,
    AssigneeId,
    AssistantId,
    Position,
}
