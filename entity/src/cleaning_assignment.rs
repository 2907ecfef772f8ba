use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cleaning_assignment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    /// Monday of the week this group is on duty, unique per congregation
    /// (checked before insert).
    pub week_start: Date,
    pub group_id: i32,
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
        belongs_to = "super::publisher_group::Entity",
        from = "Column::GroupId",
        to = "super::publisher_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PublisherGroup,
}

impl Related<super::congregation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Congregation.def()
    }
}

impl Related<super::publisher_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PublisherGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
