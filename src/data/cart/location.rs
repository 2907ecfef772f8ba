use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::cart::{CreateCartLocationParams, UpdateCartLocationParams};

pub struct CartLocationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartLocationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        congregation_id: i32,
    ) -> Result<Vec<entity::cart_location::Model>, DbErr> {
        entity::prelude::CartLocation::find()
            .filter(entity::cart_location::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::cart_location::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::cart_location::Model>, DbErr> {
        entity::prelude::CartLocation::find_by_id(id)
            .filter(entity::cart_location::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateCartLocationParams,
    ) -> Result<entity::cart_location::Model, DbErr> {
        entity::cart_location::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateCartLocationParams,
    ) -> Result<Option<entity::cart_location::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::cart_location::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.address = ActiveValue::Set(params.address);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a location and, via FK cascade, its slots and their
    /// assignments.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(location) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        location.delete(self.db).await?;

        Ok(true)
    }
}
