use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::duty::{CreateDutyAssignmentParams, UpdateDutyAssignmentParams};

pub struct DutyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DutyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets duty assignments of a congregation within an optional date range,
    /// with the publisher resolved, ordered by date then duty.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<
        Vec<(
            entity::duty_assignment::Model,
            Option<entity::publisher::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::DutyAssignment::find()
            .find_also_related(entity::prelude::Publisher)
            .filter(entity::duty_assignment::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::duty_assignment::Column::Date)
            .order_by_asc(entity::duty_assignment::Column::Duty);

        if let Some(from) = from {
            query = query.filter(entity::duty_assignment::Column::Date.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::duty_assignment::Column::Date.lte(to));
        }

        query.all(self.db).await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::duty_assignment::Model>, DbErr> {
        entity::prelude::DutyAssignment::find_by_id(id)
            .filter(entity::duty_assignment::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether the duty is already covered on that date, optionally
    /// ignoring one row (for updates).
    pub async fn duty_exists_at(
        &self,
        congregation_id: i32,
        date: NaiveDate,
        duty: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::DutyAssignment::find()
            .filter(entity::duty_assignment::Column::CongregationId.eq(congregation_id))
            .filter(entity::duty_assignment::Column::Date.eq(date))
            .filter(entity::duty_assignment::Column::Duty.eq(duty));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::duty_assignment::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateDutyAssignmentParams,
    ) -> Result<entity::duty_assignment::Model, DbErr> {
        entity::duty_assignment::ActiveModel {
            congregation_id: ActiveValue::Set(params.congregation_id),
            date: ActiveValue::Set(params.date),
            duty: ActiveValue::Set(params.duty),
            publisher_id: ActiveValue::Set(params.publisher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateDutyAssignmentParams,
    ) -> Result<Option<entity::duty_assignment::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::duty_assignment::ActiveModel = existing.into();
        active.date = ActiveValue::Set(params.date);
        active.duty = ActiveValue::Set(params.duty);
        active.publisher_id = ActiveValue::Set(params.publisher_id);

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
