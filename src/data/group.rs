use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::group::{CreateGroupParams, UpdateGroupParams};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all groups of a congregation with their member counts, ordered by
    /// name.
    pub async fn get_all_with_counts(
        &self,
        congregation_id: i32,
    ) -> Result<Vec<(entity::publisher_group::Model, u64)>, DbErr> {
        let groups = entity::prelude::PublisherGroup::find()
            .filter(entity::publisher_group::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::publisher_group::Column::Name)
            .all(self.db)
            .await?;

        let mut result = Vec::with_capacity(groups.len());
        for group in groups {
            let count = entity::prelude::Publisher::find()
                .filter(entity::publisher::Column::GroupId.eq(group.id))
                .count(self.db)
                .await?;
            result.push((group, count));
        }

        Ok(result)
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::publisher_group::Model>, DbErr> {
        entity::prelude::PublisherGroup::find_by_id(id)
            .filter(entity::publisher_group::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        params: CreateGroupParams,
    ) -> Result<entity::publisher_group::Model, DbErr> {
        entity::publisher_group::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            name: ActiveValue::Set(params.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Renames a group.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Updated group
    /// - `Ok(None)` - Group not found or not in this congregation
    pub async fn update(
        &self,
        params: UpdateGroupParams,
    ) -> Result<Option<entity::publisher_group::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::publisher_group::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a group. Member publishers get their group cleared by the
    /// FK's SET NULL action.
    ///
    /// # Returns
    /// - `Ok(true)` - The group existed and was deleted
    /// - `Ok(false)` - Group not found or not in this congregation
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(group) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        group.delete(self.db).await?;

        Ok(true)
    }
}
