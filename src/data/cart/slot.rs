use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    ModelTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::cart::{CreateCartSlotParams, UpdateCartSlotParams};

pub struct CartSlotRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartSlotRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets slots of a congregation within an optional date range, ordered by
    /// date then start time.
    ///
    /// The congregation filter goes through the slot's location since slots
    /// don't carry a congregation column themselves.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<entity::cart_slot::Model>, DbErr> {
        let mut query = entity::prelude::CartSlot::find()
            .join(
                JoinType::InnerJoin,
                entity::cart_slot::Relation::CartLocation.def(),
            )
            .filter(entity::cart_location::Column::CongregationId.eq(congregation_id))
            .order_by_asc(entity::cart_slot::Column::Date)
            .order_by_asc(entity::cart_slot::Column::StartTime);

        if let Some(from) = from {
            query = query.filter(entity::cart_slot::Column::Date.gte(from));
        }
        if let Some(to) = to {
            query = query.filter(entity::cart_slot::Column::Date.lte(to));
        }

        query.all(self.db).await
    }

    pub async fn find_in_congregation(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<entity::cart_slot::Model>, DbErr> {
        entity::prelude::CartSlot::find_by_id(id)
            .join(
                JoinType::InnerJoin,
                entity::cart_slot::Relation::CartLocation.def(),
            )
            .filter(entity::cart_location::Column::CongregationId.eq(congregation_id))
            .one(self.db)
            .await
    }

    /// Checks whether a slot already occupies (location, date, start time),
    /// optionally ignoring one slot (for updates).
    pub async fn exists_at(
        &self,
        location_id: i32,
        date: NaiveDate,
        start_time: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::CartSlot::find()
            .filter(entity::cart_slot::Column::LocationId.eq(location_id))
            .filter(entity::cart_slot::Column::Date.eq(date))
            .filter(entity::cart_slot::Column::StartTime.eq(start_time));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(entity::cart_slot::Column::Id.ne(exclude_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        params: CreateCartSlotParams,
    ) -> Result<entity::cart_slot::Model, DbErr> {
        entity::cart_slot::ActiveModel {
            location_id: ActiveValue::Set(params.location_id),
            date: ActiveValue::Set(params.date),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            fixed: ActiveValue::Set(params.fixed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        params: UpdateCartSlotParams,
    ) -> Result<Option<entity::cart_slot::Model>, DbErr> {
        let Some(existing) = self
            .find_in_congregation(params.id, params.congregation_id)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::cart_slot::ActiveModel = existing.into();
        active.location_id = ActiveValue::Set(params.location_id);
        active.date = ActiveValue::Set(params.date);
        active.start_time = ActiveValue::Set(params.start_time);
        active.end_time = ActiveValue::Set(params.end_time);
        active.fixed = ActiveValue::Set(params.fixed);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a slot and, via FK cascade, its assignments.
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, DbErr> {
        let Some(slot) = self.find_in_congregation(id, congregation_id).await? else {
            return Ok(false);
        };

        slot.delete(self.db).await?;

        Ok(true)
    }

    /// Finds the date of the most recent fixed slot of a congregation.
    ///
    /// The projection uses the week containing this date as its template.
    pub async fn latest_fixed_date(
        &self,
        congregation_id: i32,
    ) -> Result<Option<NaiveDate>, DbErr> {
        let slot = entity::prelude::CartSlot::find()
            .join(
                JoinType::InnerJoin,
                entity::cart_slot::Relation::CartLocation.def(),
            )
            .filter(entity::cart_location::Column::CongregationId.eq(congregation_id))
            .filter(entity::cart_slot::Column::Fixed.eq(true))
            .order_by_desc(entity::cart_slot::Column::Date)
            .one(self.db)
            .await?;

        Ok(slot.map(|s| s.date))
    }

    /// Gets the fixed slots of a congregation within one week starting at
    /// `week_start` (inclusive, 7 days).
    pub async fn fixed_slots_in_week(
        &self,
        congregation_id: i32,
        week_start: NaiveDate,
    ) -> Result<Vec<entity::cart_slot::Model>, DbErr> {
        let week_end = week_start + chrono::Duration::days(6);

        entity::prelude::CartSlot::find()
            .join(
                JoinType::InnerJoin,
                entity::cart_slot::Relation::CartLocation.def(),
            )
            .filter(entity::cart_location::Column::CongregationId.eq(congregation_id))
            .filter(entity::cart_slot::Column::Fixed.eq(true))
            .filter(entity::cart_slot::Column::Date.gte(week_start))
            .filter(entity::cart_slot::Column::Date.lte(week_end))
            .order_by_asc(entity::cart_slot::Column::Date)
            .order_by_asc(entity::cart_slot::Column::StartTime)
            .all(self.db)
            .await
    }
}
