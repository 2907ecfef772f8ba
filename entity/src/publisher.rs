use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "publisher")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    pub group_id: Option<i32>,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// One of "publisher", "ministerial_servant" or "elder".
    pub privilege: String,
    pub pioneer: bool,
    pub active: bool,
    pub created_at: DateTimeUtc,
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
        on_delete = "SetNull"
    )]
    PublisherGroup,
    #[sea_orm(has_many = "super::territory_assignment::Entity")]
    TerritoryAssignment,
    #[sea_orm(has_many = "super::cart_assignment::Entity")]
    CartAssignment,
    #[sea_orm(has_many = "super::duty_assignment::Entity")]
    DutyAssignment,
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
