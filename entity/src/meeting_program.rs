use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meeting_program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    /// Monday of the program week, unique per congregation (checked before
    /// insert).
    pub week_start: Date,
    pub chairman_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::congregation::Entity",
        from = "Column::CongregationId",
        to = "super::congregation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Congregation,
    #[sea_orm(
        belongs_to = "super::publisher::Entity",
        from = "Column::ChairmanId",
        to = "super::publisher::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Chairman,
    #[sea_orm(has_many = "super::program_part::Entity")]
    ProgramPart,
}

impl Related<super::congregation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Congregation.def()
    }
}

impl Related<super::program_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProgramPart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
