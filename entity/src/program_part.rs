use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "program_part")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub program_id: i32,
    /// One of "treasures", "ministry" or "living".
    pub section: String,
    pub title: String,
    pub duration_minutes: i32,
    pub assignee_id: Option<i32>,
    pub assistant_id: Option<i32>,
    /// Order of the part within its program.
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::meeting_program::Entity",
        from = "Column::ProgramId",
        to = "super::meeting_program::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MeetingProgram,
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::AssigneeId",
        to = "super::publisher::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Assignee,
}

impl Related<super::meeting_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MeetingProgram.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
