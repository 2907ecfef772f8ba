use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "congregation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city: String,
    /// Weekday of the weekend meeting, 0 = Monday .. 6 = Sunday.
    pub meeting_weekday: i32,
    /// Meeting start time as "HH:MM".
    pub meeting_time: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user::Entity")]
    User,
    #[sea_orm(has_many = "super::publisher::Entity")]
    Publisher,
    #[sea_orm(has_many = "super::publisher_group::Entity")]
    PublisherGroup,
    #[sea_orm(has_many = "super::territory::Entity")]
    Territory,
    #[sea_orm(has_many = "super::cart_location::Entity")]
    CartLocation,
    #[sea_orm(has_many = "super::cleaning_assignment::Entity")]
    CleaningAssignment,
    #[sea_orm(has_many = "super::duty_assignment::Entity")]
    DutyAssignment,
    #[sea_orm(has_many = "super::meeting_program::Entity")]
    MeetingProgram,
    #[sea_orm(has_many = "super::speaker::Entity")]
    Speaker,
    #[sea_orm(has_many = "super::talk::Entity")]
    Talk,
    #[sea_orm(has_many = "super::talk_schedule::Entity")]
    TalkSchedule,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::publisher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Publisher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
