use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::cleaning::{CreateCleaningAssignmentParams, UpdateCleaningAssignmentParams};

pub struct CleaningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CleaningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets cleaning weeks of a congregation within an optional date range,
    /// with the group resolved, ordered by week.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<
        Vec<(
            entity::cleaning_assignment::Model,
            Option<entity::publisher_group::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::CleaningAssignment::find()
            .find_also_related(entity::prelude::PublisherGroup)
            .filter(entity::cleaning_assignment::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::cleaning_assignment::Column::WeekStart);

        if let Some(from) = from {
            query = query.filter(entity::cleaning_assignment::Column::WeekStart.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::cleaning_assignment::Column::WeekStart.lte(to));
        }

        query.all(self.db).await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::cleaning_assignment::Model>, DbErr> {
        entity::prelude::CleaningAssignment::find_by_id(id)
            .filter(entity::cleaning_assignment::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether the week already has a cleaning group, optionally
    /// ignoring one row (for updates).
    pub async fn week_exists(
        &self,
        congregation_id: i32,
        week_start: NaiveDate,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::CleaningAssignment::find()
            .filter(entity::cleaning_assignment::Column::CongregationId.eq(congregation_id))
            .filter(entity::cleaning_assignment::Column::WeekStart.eq(week_start));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::cleaning_assignment::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateCleaningAssignmentParams,
    ) -> Result<entity::cleaning_assignment::Model, DbErr> {
        entity::cleaning_assignment::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            week_start: ActiveValue::Set(params.week_start),
            group_id: ActiveValue::Set(params.group_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateCleaningAssignmentParams,
    ) -> Result<Option<entity::cleaning_assignment::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::cleaning_assignment::ActiveModel = existing.into();
        active.week_start = ActiveValue::Set(params.week_start);
        active.group_id = ActiveValue::Set(params.group_id);

        Ok(Some(active.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(assignment) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        assignment.delete(self.db).await?;

        Ok(true)
    }
}
