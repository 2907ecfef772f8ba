use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::publisher::{CreatePublisherParams, UpdatePublisherParams};

pub struct PublisherRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublisherRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated publishers of a congregation with their group resolved,
    /// optionally filtered to one group, ordered by name.
    ///
    /// # Returns
    /// - `Ok((rows, total))` - Page of (publisher, group) pairs and total count
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        congregation_id: i32,
        group_id: Option<i32>,
        page: u64,
        per_page: u64,
    ) -> Result<
        (
            Vec<(
                entity::publisher::Model,
                Option<entity::publisher_group::Model>,
            )>,
            u64,
        ),
        DbErr,
    > {
        let mut query = entity::prelude::Publisher::find()
            .find_also_related(entity::prelude::PublisherGroup)
            .filter(entity::publisher::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::publisher::Column::Name);

        if let Some(group_id) = group_id {
            query = query.filter(entity::publisher::Column::GroupId.eq(group_id));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok((rows, total))
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::publisher::Model>, DbErr> {
        entity::prelude::Publisher::find_by_id(id)
            .filter(entity::publisher::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Looks a publisher up by exact name. Used by the PDF import to skip
    /// rows that already exist.
    pub async fn find_by_name(
        &self,
        congregation_id: i32,
        name: &str,
    ) -> Result<Option<entity::publisher::Model>, DbErr> {
        entity::prelude::Publisher::find()
            .filter(entity::publisher::Column::CongregationId.eq(congregation_id))
            .filter(entity::publisher::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreatePublisherParams,
    ) -> Result<entity::publisher::Model, DbErr> {
        entity::publisher::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            group_id: ActiveValue::Set(params.group_id),
            name: ActiveValue::Set(params.name),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            privilege: ActiveValue::Set(params.privilege),
            pioneer: ActiveValue::Set(params.pioneer),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates all editable fields of a publisher.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated publisher
    /// - `Ok(None)` - Publisher not found or not in this congregation
    pub async fn update(
        &self,
        params: UpdatePublisherParams,
    ) -> Result<Option<entity::publisher::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::publisher::ActiveModel = existing.into();
        active.group_id = ActiveValue::Set(params.group_id);
        active.name = ActiveValue::Set(params.name);
        active.phone = ActiveValue::Set(params.phone);
        active.email = ActiveValue::Set(params.email);
        active.privilege = ActiveValue::Set(params.privilege);
        active.pioneer = ActiveValue::Set(params.pioneer);
        active.active = ActiveValue::Set(params.active);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a publisher. Cart, territory and duty assignments referencing
    /// it are removed by FK cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - The publisher existed and was deleted
    /// - `Ok(false)` - Publisher not found or not in this congregation
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(publisher) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        publisher.delete(self.db).await?;

        Ok(true)
    }
}
