use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::congregation::{CreateCongregationParams, UpdateCongregationParams};

pub struct CongregationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CongregationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::congregation::Model>, DbErr> {
        entity::prelude::Congregation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Creates the congregation during first-time setup.
    pub async fn create(
        &self,
        params: CreateCongregationParams,
    ) -> Result<entity::congregation::Model, DbErr> {
        entity::congregation::ActiveModel {
            name: ActiveValue::Set(params.name),
            city: ActiveValue::Set(params.city),
            meeting_weekday: ActiveValue::Set(params.meeting_weekday),
            meeting_time: ActiveValue::Set(params.meeting_time),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates name, city and meeting settings.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated congregation
    /// - `Ok(None)` - No congregation with that id
    pub async fn update(
        &self,
        params: UpdateCongregationParams,
    ) -> Result<Option<entity::congregation::Model>, DbErr> {
        let Some(existing) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active: entity::congregation::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.city = ActiveValue::Set(params.city);
        active.meeting_weekday = ActiveValue::Set(params.meeting_weekday);
        active.meeting_time = ActiveValue::Set(params.meeting_time);

        Ok(Some(active.update(self.db).await?))
    }
}
