use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "talk_schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    /// Date of the public talk, unique per congregation (checked before
    /// insert) and required to fall on the congregation's meeting weekday.
    pub date: Date,
    pub speaker_id: i32,
    pub talk_id: Option<i32>,
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
        belongs_to = "super::speaker::Entity",
        from = "Column::SpeakerId",
        to = "super::speaker::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Speaker,
    #[sea_orm(
        belongs_to = "super::talk::Entity",
        from = "Column::TalkId",
        to = "super::talk::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Talk,
}

impl Related<super::congregation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Congregation.def()
    }
}

impl Related<super::speaker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Speaker.def()
    }
}

impl Related<super::talk::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Talk.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
