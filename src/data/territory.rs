use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::territory::{
    AssignTerritoryParams, CreateTerritoryParams, UpdateTerritoryParams,
};

pub struct TerritoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TerritoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all territories of a congregation ordered by card number.
    pub async fn get_all(
        &self,
        congregation_id: i32,
    ) -> Result<Vec<entity::territory::Model>, DbErr> {
        entity::prelude::Territory::find()
            .filter(entity::territory::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::territory::Column::Number)
            .all(self.db)
            .await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::territory::Model>, DbErr> {
        entity::prelude::Territory::find_by_id(id)
            .filter(entity::territory::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether a card number is already taken in the congregation,
    /// optionally ignoring one territory (for updates).
    pub async fn number_exists(
        &self,
        congregation_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Territory::find()
            .filter(entity::territory::Column::CongregationId.eq(congregation_id))
            .filter(entity::territory::Column::Number.eq(number));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::territory::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateTerritoryParams,
    ) -> Result<entity::territory::Model, DbErr> {
        entity::territory::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            number: ActiveValue::Set(params.number),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateTerritoryParams,
    ) -> Result<Option<entity::territory::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::territory::ActiveModel = existing.into();
        active.number = ActiveValue::Set(params.number);
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a territory and, via FK cascade, its assignment history.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(territory) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        territory.delete(self.db).await?;

        Ok(true)
    }

    /// Finds the open (unreturned) assignment of a territory, if any.
    pub async fn open_assignment(
        &self,
        territory_id: i32,
    ) -> Result<Option<entity::territory_assignment::Model>, DbErr> {
        entity::prelude::TerritoryAssignment::find()
            .filter(entity::territory_assignment::Column::TerritoryId.eq(territory_id))
            .filter(entity::territory_assignment::Column::ReturnedOn.is_null())
            .one(self.db)
            .await
    }

    /// Creates a new assignment. The caller is responsible for checking that
    /// no assignment is currently open.
    pub async fn create_assignment(
        &self,
        params: AssignTerritoryParams,
    ) -> Result<entity::territory_assignment::Model, DbErr> {
        entity::territory_assignment::ActiveModel {
            territory_id: ActiveValue::Set(params.territory_id),
            publisher_id: ActiveValue::Set(params.publisher_id),
            assigned_on: ActiveValue::Set(params.assigned_on),
            returned_on: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Closes an open assignment by setting its return date.
    pub async fn close_assignment(
        &self,
        assignment: entity::territory_assignment::Model,
        returned_on: NaiveDate,
    ) -> Result<entity::territory_assignment::Model, DbErr> {
        let mut active: entity::territory_assignment::ActiveModel = assignment.into();
        active.returned_on = ActiveValue::Set(Some(returned_on));

        active.update(self.db).await
    }

    /// Gets the assignment history of a territory, newest first, with the
    /// publisher resolved for display.
    pub async fn assignment_history(
        &self,
        territory_id: i32,
    ) -> Result<
        Vec<(
            entity::territory_assignment::Model,
            Option<entity::publisher::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TerritoryAssignment::find()
            .find_also_related(entity::prelude::Publisher)
            .filter(entity::territory_assignment::Column::TerritoryId.eq(territory_id))
            .order_by_desc(entity::territory_assignment::Column::AssignedOn)
            .all(self.db)
            .await
    }
}
