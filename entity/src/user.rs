use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub congregation_id: i32,
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC string; never serialized to API responses.
    pub password_hash: String,
    pub name: String,
    pub admin: bool,
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
    #[sea_orm(has_many = "super::permission::Entity")]
    Permission,
}

impl Related<super::congregation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Congregation.def()
    }
}

impl Related<super::permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Permission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
