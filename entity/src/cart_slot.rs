use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cart_slot")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub date: Date,
    /// Start of the shift as "HH:MM".
    pub start_time: String,
    /// End of the shift as "HH:MM".
    pub end_time: String,
    /// Fixed slots are the weekly template the projection copies forward.
    pub fixed: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cart_location::Entity",
        from = "Column::LocationId",
        to = "super::cart_location::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CartLocation,
    #[sea_orm(has_many = "super::cart_assignment::Entity")]
    CartAssignment,
}

impl Related<super::cart_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartLocation.def()
    }
}

impl Related<super::cart_assignment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartAssignment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
