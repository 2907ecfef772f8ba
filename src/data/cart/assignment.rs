use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QuerySelect, RelationTrait,
};

pub struct CartAssignmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartAssignmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the publishers assigned to a slot as (id, name) pairs.
    pub async fn publishers_for_slot(&self, slot_id: i32) -> Result<Vec<(i32, String)>, DbErr> {
        let rows = entity::prelude::CartAssignment::find()
            .find_also_related(entity::prelude::Publisher)
            .filter(entity::cart_assignment::Column::SlotId.eq(slot_id))
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(assignment, publisher)| {
                publisher.map(|p| (assignment.publisher_id, p.name))
            })
            .collect())
    }

    pub async fn count_for_slot(&self, slot_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CartAssignment::find()
            .filter(entity::cart_assignment::Column::SlotId.eq(slot_id))
            .count(self.db)
            .await
    }

    /// Checks whether the publisher is already on this slot.
    pub async fn exists(&self, slot_id: i32, publisher_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CartAssignment::find()
            .filter(entity::cart_assignment::Column::SlotId.eq(slot_id))
            .filter(entity::cart_assignment::Column::PublisherId.eq(publisher_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether the publisher is booked on any slot at the same date
    /// and start time, optionally ignoring one slot.
    pub async fn publisher_booked_at(
        &self,
        publisher_id: i32,
        date: NaiveDate,
        start_time: &str,
        exclude_slot_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::CartAssignment::find()
            .join(
                JoinType::InnerJoin,
                entity::cart_assignment::Relation::CartSlot.def(),
            )
            .filter(entity::cart_assignment::Column::PublisherId.eq(publisher_id))
            .filter(entity::cart_slot::Column::Date.eq(date))
            .filter(entity::cart_slot::Column::StartTime.eq(start_time));

        if let Some(exclude_slot_id) = exclude_slot_id {
            query = query.filter(entity::cart_assignment::Column::SlotId.ne(exclude_slot_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn create(
        &self,
        slot_id: i32,
        publisher_id: i32,
    ) -> Result<entity::cart_assignment::Model, DbErr> {
        entity::cart_assignment::ActiveModel {
            slot_id: ActiveValue::Set(slot_id),
            publisher_id: ActiveValue::Set(publisher_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Removes a publisher from a slot.
    ///
    /// # Returns
    /// - `Ok(true)` - An assignment was removed
    /// - `Ok(false)` - The publisher was not on this slot
    pub async fn delete(&self, slot_id: i32, publisher_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CartAssignment::delete_many()
            .filter(entity::cart_assignment::Column::SlotId.eq(slot_id))
            .filter(entity::cart_assignment::Column::PublisherId.eq(publisher_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
