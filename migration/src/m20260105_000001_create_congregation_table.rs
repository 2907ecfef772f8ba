use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Congregation::Table)
                    .if_not_exists()
                    .col(pk_auto(Congregation::Id))
                    .col(string(Congregation::Name))
                    .col(string(Congregation::City))
                    .col(integer(Congregation::MeetingWeekday))
                    .col(string(Congregation::MeetingTime))
                    .col(
                        timestamp(Congregation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Congregation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Congregation {
    Table,
    Id,
    Name,
    City,
    MeetingWeekday,
    MeetingTime,
    CreatedAt,
}
