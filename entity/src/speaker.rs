use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "speaker")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    pub name: String,
    /// Home congregation of the visiting speaker, free text.
    pub congregation_name: String,
    pub phone: Option<String>,
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
    #[sea_orm(has_many = "super::talk_schedule::Entity")]
    TalkSchedule,
}

impl Related<super::congregation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Congregation.def()
    }
}

impl Related<super::talk_schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TalkSchedule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
