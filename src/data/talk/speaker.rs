use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder,
};

use crate::model::talk::{CreateSpeakerParams, UpdateSpeakerParams};

pub struct SpeakerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SpeakerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        congregation_id: i32,
    ) -> Result<Vec<entity::speaker::Model>, DbErr> {
        entity::prelude::Speaker::find()
            .filter(entity::speaker::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::speaker::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::speaker::Model>, DbErr> {
        entity::prelude::Speaker::find_by_id(id)
            .filter(entity::speaker::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateSpeakerParams,
    ) -> Result<entity::speaker::Model, DbErr> {
        entity::speaker::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            name: ActiveValue::Set(params.name),
            congregation_name: ActiveValue::Set(params.congregation_name),
            phone: ActiveValue::Set(params.phone),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateSpeakerParams,
    ) -> Result<Option<entity::speaker::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::speaker::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.congregation_name = ActiveValue::Set(params.congregation_name);
        active.phone = ActiveValue::Set(params.phone);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a speaker and, via FK cascade, their scheduled talks.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(speaker) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        speaker.delete(self.db).await?;

        Ok(true)
    }
}
