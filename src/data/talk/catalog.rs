use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::talk::{CreateTalkParams, UpdateTalkParams};

/// Repository for the public-talk outline catalog.
pub struct TalkRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TalkRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, congregation_id: i32) -> Result<Vec<entity::talk::Model>, DbErr> {
        entity::prelude::Talk::find()
            .filter(entity::talk::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::talk::Column::Number)
            .all(self.db)
            .await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::talk::Model>, DbErr> {
        entity::prelude::Talk::find_by_id(id)
            .filter(entity::talk::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether an outline number is already in the catalog, optionally
    /// ignoring one talk (for updates).
    pub async fn number_exists(
        &self,
        congregation_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Talk::find()
            .filter(entity::talk::Column::CongregationId.eq(congregation_id))
            .filter(entity::talk::Column::Number.eq(number));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::talk::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(&self, params: CreateTalkParams) -> Result<entity::talk::Model, DbErr> {
        entity::talk::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            number: ActiveValue::Set(params.number),
            theme: ActiveValue::Set(params.theme),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateTalkParams,
    ) -> Result<Option<entity::talk::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::talk::ActiveModel = existing.into();
        active.number = ActiveValue::Set(params.number);
        active.theme = ActiveValue::Set(params.theme);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a talk outline. Scheduled talks keep their row but lose the
    /// outline reference via the FK's SET NULL action.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(talk) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        talk.delete(self.db).await?;

        Ok(true)
    }
}
