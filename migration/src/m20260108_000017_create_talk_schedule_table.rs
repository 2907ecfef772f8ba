use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_congregation_table::Congregation,
    m20260108_000015_create_speaker_table::Speaker, m20260108_000016_create_talk_table::Talk,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TalkSchedule::Table)
                    .if_not_exists()
                    .col(pk_auto(TalkSchedule::Id))
                    .col(integer(TalkSchedule::CongregationId))
                    .col(date(TalkSchedule::Date))
                    .col(integer(TalkSchedule::SpeakerId))
                    .col(integer_null(TalkSchedule::TalkId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talk_schedule_congregation_id")
                            .from(TalkSchedule::Table, TalkSchedule::CongregationId)
                            .to(Congregation::Table, Congregation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talk_schedule_speaker_id")
                            .from(TalkSchedule::Table, TalkSchedule::SpeakerId)
                            .to(Speaker::Table, Speaker::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talk_schedule_talk_id")
                            .from(TalkSchedule::Table, TalkSchedule::TalkId)
                            .to(Talk::Table, Talk::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TalkSchedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TalkSchedule {
    Table,
    Id,
    CongregationId,
    Date,
    SpeakerId,
    TalkId,
}
