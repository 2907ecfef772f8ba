use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "territory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    /// Card number, unique per congregation (checked before insert).
    pub number: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
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
    #[sea_orm(has_many = "super::territory_assignment::Entity")]
    TerritoryAssignment,
}

impl Related<super::congregation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Congregation.def()
    }
}

impl Related<super::territory_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TerritoryAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
