use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        cart::{CartAssignmentRepository, CartLocationRepository, CartSlotRepository},
        publisher::PublisherRepository,
    },
    error::AppError,
    model::cart::{
        CartLocationParam, CartSlotParam, CreateCartLocationParams, CreateCartSlotParams,
        GenerateReport, UpdateCartLocationParams, UpdateCartSlotParams, SLOT_CAPACITY,
    },
};

/// Upper bound on one projection request; about half a year of schedules.
const MAX_PROJECTION_WEEKS: u32 = 26;

pub struct CartService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CartService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Locations

    pub async fn get_locations(
        &self,
        congregation_id: i32,
    ) -> Result<Vec<CartLocationParam>, AppError> {
        let repo = CartLocationRepository::new(self.db);

        let locations = repo.get_all(congregation_id).await?;

        Ok(locations
            .into_iter()
            .map(CartLocationParam::from_entity)
            .collect())
    }

    pub async fn create_location(
        &self,
        params: CreateCartLocationParams,
    ) -> Result<CartLocationParam, AppError> {
        let repo = CartLocationRepository::new(self.db);

        let location = repo.create(params).await?;

        Ok(CartLocationParam::from_entity(location))
    }

    /// Updates a location.
    /// Returns None if it doesn't exist in this congregation.
    pub async fn update_location(
        &self,
        params: UpdateCartLocationParams,
    ) -> Result<Option<CartLocationParam>, AppError> {
        let repo = CartLocationRepository::new(self.db);

        Ok(repo
            .update(params)
            .await?
            .map(CartLocationParam::from_entity))
    }

    /// Deletes a location along with its slots and assignments (FK cascade).
    pub async fn delete_location(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<bool, AppError> {
        let repo = CartLocationRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    // Slots

    /// Gets slots in a date range with location names and publishers
    /// resolved.
    pub async fn get_slots(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<CartSlotParam>, AppError> {
        let slot_repo = CartSlotRepository::new(self.db);
        let location_repo = CartLocationRepository::new(self.db);
        let assignment_repo = CartAssignmentRepository::new(self.db);

        let location_names: HashMap<i32, String> = location_repo
            .get_all(congregation_id)
            .await?
            .into_iter()
            .map(|l| (l.id, l.name))
            .collect();

        let slots = slot_repo.get_in_range(congregation_id, from, to).await?;

        let mut result = Vec::with_capacity(slots.len());
        for slot in slots {
            let publishers = assignment_repo.publishers_for_slot(slot.id).await?;
            let location_name = location_names
                .get(&slot.location_id)
                .cloned()
                .unwrap_or_default();
            result.push(CartSlotParam::from_entity(slot, location_name, publishers));
        }

        Ok(result)
    }

    /// Creates a slot.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown location, or the end time is
    ///   not after the start time
    /// - `Err(AppError::Conflict)` - Another slot occupies (location, date,
    ///   start time)
    pub async fn create_slot(
        &self,
        congregation_id: i32,
        params: CreateCartSlotParams,
    ) -> Result<CartSlotParam, AppError> {
        let slot_repo = CartSlotRepository::new(self.db);
        let location_repo = CartLocationRepository::new(self.db);

        let Some(location) = location_repo
            .find_in_congregation(params.location_id, congregation_id)
            .await?
        else {
            return Err(AppError::BadRequest(format!(
                "Cart location {} does not exist",
                params.location_id
            )));
        };

        if params.end_time <= params.start_time {
            return Err(AppError::BadRequest(
                "End time must be after start time".to_string(),
            ));
        }

        if slot_repo
            .exists_at(params.location_id, params.date, &params.start_time, None)
            .await?
        {
            return Err(AppError::Conflict(
                "A slot already exists at this location, date and time".to_string(),
            ));
        }

        let slot = slot_repo.create(params).await?;

        Ok(CartSlotParam::from_entity(slot, location.name, Vec::new()))
    }

    /// Updates a slot.
    /// Returns None if it doesn't exist in this congregation.
    pub async fn update_slot(
        &self,
        params: UpdateCartSlotParams,
    ) -> Result<Option<CartSlotParam>, AppError> {
        let slot_repo = CartSlotRepository::new(self.db);
        let location_repo = CartLocationRepository::new(self.db);
        let assignment_repo = CartAssignmentRepository::new(self.db);

        let Some(location) = location_repo
            .find_in_congregation(params.location_id, params.congregation_id)
            .await?
        else {
            return Err(AppError::BadRequest(format!(
                "Cart location {} does not exist",
                params.location_id
            )));
        };

        if params.end_time <= params.start_time {
            return Err(AppError::BadRequest(
                "End time must be after start time".to_string(),
            ));
        }

        if slot_repo
            .exists_at(
                params.location_id,
                params.date,
                &params.start_time,
                Some(params.id),
            )
            .await?
        {
            return Err(AppError::Conflict(
                "A slot already exists at this location, date and time".to_string(),
            ));
        }

        let Some(slot) = slot_repo.update(params).await? else {
            return Ok(None);
        };

        let publishers = assignment_repo.publishers_for_slot(slot.id).await?;

        Ok(Some(CartSlotParam::from_entity(
            slot,
            location.name,
            publishers,
        )))
    }

    /// Deletes a slot and its assignments (FK cascade).
    pub async fn delete_slot(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = CartSlotRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    // Assignments

    /// Puts a publisher on a slot.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Slot not in this congregation
    /// - `Err(AppError::BadRequest)` - Publisher not in this congregation
    /// - `Err(AppError::Conflict)` - Slot full, publisher already on the
    ///   slot, or publisher booked elsewhere at the same date and time
    pub async fn assign_publisher(
        &self,
        congregation_id: i32,
        slot_id: i32,
        publisher_id: i32,
    ) -> Result<(), AppError> {
        let slot_repo = CartSlotRepository::new(self.db);
        let assignment_repo = CartAssignmentRepository::new(self.db);
        let publisher_repo = PublisherRepository::new(self.db);

        let Some(slot) = slot_repo
            .find_in_congregation(slot_id, congregation_id)
            .await?
        else {
            return Err(AppError::NotFound("Slot not found".to_string()));
        };

        if publisher_repo
            .find_in_congregation(publisher_id, congregation_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Publisher {} does not exist",
                publisher_id
            )));
        }

        if assignment_repo.exists(slot_id, publisher_id).await? {
            return Err(AppError::Conflict(
                "Publisher is already on this slot".to_string(),
            ));
        }

        if assignment_repo.count_for_slot(slot_id).await? >= SLOT_CAPACITY {
            return Err(AppError::Conflict(format!(
                "Slot already has {} publishers",
                SLOT_CAPACITY
            )));
        }

        if assignment_repo
            .publisher_booked_at(publisher_id, slot.date, &slot.start_time, Some(slot_id))
            .await?
        {
            return Err(AppError::Conflict(
                "Publisher is already booked at this date and time".to_string(),
            ));
        }

        assignment_repo.create(slot_id, publisher_id).await?;

        Ok(())
    }

    /// Removes a publisher from a slot.
    ///
    /// # Returns
    /// - `Ok(true)` - Removed
    /// - `Ok(false)` - The publisher was not on the slot
    /// - `Err(AppError::NotFound)` - Slot not in this congregation
    pub async fn unassign_publisher(
        &self,
        congregation_id: i32,
        slot_id: i32,
        publisher_id: i32,
    ) -> Result<bool, AppError> {
        let slot_repo = CartSlotRepository::new(self.db);
        let assignment_repo = CartAssignmentRepository::new(self.db);

        if slot_repo
            .find_in_congregation(slot_id, congregation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Slot not found".to_string()));
        }

        Ok(assignment_repo.delete(slot_id, publisher_id).await?)
    }

    // Projection

    /// Projects the most recent week of fixed slots forward N weeks.
    ///
    /// The template week is the Monday-to-Sunday week containing the latest
    /// fixed slot. Each template slot is cloned into the target weeks along
    /// with its publisher assignments; a clone is skipped when its
    /// (location, date, start time) already exists. Clones are themselves
    /// marked fixed so the next projection continues from the newest week.
    ///
    /// # Returns
    /// - `Ok(report)` - Created/copied/skipped counts
    /// - `Err(AppError::BadRequest)` - Weeks out of 1..=26, or no fixed
    ///   slots exist to project from
    pub async fn generate_fixed_schedules(
        &self,
        congregation_id: i32,
        weeks: u32,
    ) -> Result<GenerateReport, AppError> {
        if weeks == 0 || weeks > MAX_PROJECTION_WEEKS {
            return Err(AppError::BadRequest(format!(
                "Weeks must be between 1 and {}",
                MAX_PROJECTION_WEEKS
            )));
        }

        let slot_repo = CartSlotRepository::new(self.db);
        let assignment_repo = CartAssignmentRepository::new(self.db);

        let Some(latest) = slot_repo.latest_fixed_date(congregation_id).await? else {
            return Err(AppError::BadRequest(
                "There are no fixed slots to project from".to_string(),
            ));
        };

        let week_start = latest - Duration::days(latest.weekday().num_days_from_monday() as i64);
        let template = slot_repo
            .fixed_slots_in_week(congregation_id, week_start)
            .await?;

        let mut report = GenerateReport::default();

        for week in 1..=weeks {
            let offset = Duration::weeks(week as i64);

            for slot in &template {
                let date = slot.date + offset;

                if slot_repo
                    .exists_at(slot.location_id, date, &slot.start_time, None)
                    .await?
                {
                    report.skipped_slots += 1;
                    continue;
                }

                let created = slot_repo
                    .create(CreateCartSlotParams {
                        location_id: slot.location_id,
                        date,
                        start_time: slot.start_time.clone(),
                        end_time: slot.end_time.clone(),
                        fixed: true,
                    })
                    .await?;
                report.created_slots += 1;

                for (publisher_id, _) in assignment_repo.publishers_for_slot(slot.id).await? {
                    assignment_repo.create(created.id, publisher_id).await?;
                    report.copied_assignments += 1;
                }
            }
        }

        tracing::info!(
            "Projected fixed cart schedules: {} slots created, {} assignments copied, {} skipped",
            report.created_slots,
            report.copied_assignments,
            report.skipped_slots
        );

        Ok(report)
    }

    /// Number of whole weeks the fixed schedule horizon is short of `target`
    /// weeks past `today`. Used by the daily top-up job.
    pub async fn weeks_below_horizon(
        &self,
        congregation_id: i32,
        today: NaiveDate,
        target_weeks: u32,
    ) -> Result<u32, AppError> {
        let slot_repo = CartSlotRepository::new(self.db);

        let Some(latest) = slot_repo.latest_fixed_date(congregation_id).await? else {
            return Ok(0);
        };

        let target = today + Duration::weeks(target_weeks as i64);
        if latest >= target {
            return Ok(0);
        }

        let days_short = (target - latest).num_days();
        Ok((days_short as u64).div_ceil(7) as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Tests that creating a slot at an occupied (location, date, start
    /// time) is rejected.
    ///
    /// Expected: Err(Conflict) for the duplicate
    #[tokio::test]
    async fn rejects_duplicate_slot() {
        let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let location = factory::create_location(db, congregation.id).await.unwrap();
        let service = CartService::new(db);

        let params = CreateCartSlotParams {
            location_id: location.id,
            date: date(2026, 3, 2),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            fixed: false,
        };

        service
            .create_slot(congregation.id, params.clone())
            .await
            .unwrap();

        let result = service.create_slot(congregation.id, params).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests that the slot capacity limit is enforced.
    ///
    /// Expected: Err(Conflict) for the fourth publisher
    #[tokio::test]
    async fn rejects_overfull_slot() {
        let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let location = factory::create_location(db, congregation.id).await.unwrap();
        let slot = factory::create_slot(db, location.id, date(2026, 3, 2))
            .await
            .unwrap();
        let service = CartService::new(db);

        for _ in 0..SLOT_CAPACITY {
            let publisher = factory::create_publisher(db, congregation.id).await.unwrap();
            service
                .assign_publisher(congregation.id, slot.id, publisher.id)
                .await
                .unwrap();
        }

        let extra = factory::create_publisher(db, congregation.id).await.unwrap();
        let result = service
            .assign_publisher(congregation.id, slot.id, extra.id)
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests that a publisher cannot be booked twice at the same date and
    /// start time, even across locations.
    ///
    /// Expected: Err(Conflict) for the clashing slot
    #[tokio::test]
    async fn rejects_double_booked_publisher() {
        let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let first_location = factory::create_location(db, congregation.id).await.unwrap();
        let second_location = factory::create_location(db, congregation.id).await.unwrap();
        let first_slot = factory::create_slot(db, first_location.id, date(2026, 3, 2))
            .await
            .unwrap();
        let second_slot = factory::create_slot(db, second_location.id, date(2026, 3, 2))
            .await
            .unwrap();
        let publisher = factory::create_publisher(db, congregation.id).await.unwrap();
        let service = CartService::new(db);

        service
            .assign_publisher(congregation.id, first_slot.id, publisher.id)
            .await
            .unwrap();

        let result = service
            .assign_publisher(congregation.id, second_slot.id, publisher.id)
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests the projection: slots and assignments are cloned into the
    /// following weeks.
    ///
    /// Expected: Ok with 2 weeks * 2 slots created and assignments copied
    #[tokio::test]
    async fn projects_fixed_week_forward() {
        let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let location = factory::create_location(db, congregation.id).await.unwrap();
        let publisher = factory::create_publisher(db, congregation.id).await.unwrap();
        let service = CartService::new(db);

        let monday_slot = factory::CartSlotFactory::new(db, location.id)
            .date(date(2026, 3, 2))
            .fixed(true)
            .build()
            .await
            .unwrap();
        factory::CartSlotFactory::new(db, location.id)
            .date(date(2026, 3, 4))
            .start_time("14:00")
            .end_time("16:00")
            .fixed(true)
            .build()
            .await
            .unwrap();

        CartAssignmentRepository::new(db)
            .create(monday_slot.id, publisher.id)
            .await
            .unwrap();

        let report = service
            .generate_fixed_schedules(congregation.id, 2)
            .await
            .unwrap();

        assert_eq!(report.created_slots, 4);
        assert_eq!(report.copied_assignments, 2);
        assert_eq!(report.skipped_slots, 0);

        // The clone of the Monday slot lands exactly one week out, with the
        // publisher on it.
        let next_week = CartSlotRepository::new(db)
            .get_in_range(congregation.id, Some(date(2026, 3, 9)), Some(date(2026, 3, 9)))
            .await
            .unwrap();
        assert_eq!(next_week.len(), 1);
        assert!(next_week[0].fixed);
        assert_eq!(
            CartAssignmentRepository::new(db)
                .count_for_slot(next_week[0].id)
                .await
                .unwrap(),
            1
        );
    }

    /// Tests that the projection skips target slots that already exist.
    ///
    /// Expected: an occupied (location, date, start time) is reported as
    /// skipped, not duplicated
    #[tokio::test]
    async fn projection_skips_existing_slots() {
        let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let location = factory::create_location(db, congregation.id).await.unwrap();
        let service = CartService::new(db);

        factory::CartSlotFactory::new(db, location.id)
            .date(date(2026, 3, 2))
            .fixed(true)
            .build()
            .await
            .unwrap();

        // A hand-created slot already occupies the projection target.
        factory::create_slot(db, location.id, date(2026, 3, 9))
            .await
            .unwrap();

        let report = service
            .generate_fixed_schedules(congregation.id, 1)
            .await
            .unwrap();

        assert_eq!(report.created_slots, 0);
        assert_eq!(report.skipped_slots, 1);

        // Re-running changes nothing; the target is still occupied.
        let again = service
            .generate_fixed_schedules(congregation.id, 1)
            .await
            .unwrap();
        assert_eq!(again.created_slots, 0);
        assert_eq!(again.skipped_slots, 1);
    }

    /// Tests the weeks argument bounds.
    ///
    /// Expected: Err(BadRequest) for 0 and for values past the cap
    #[tokio::test]
    async fn rejects_out_of_range_weeks() {
        let test = TestBuilder::new().with_cart_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = CartService::new(db);

        assert!(matches!(
            service.generate_fixed_schedules(congregation.id, 0).await,
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.generate_fixed_schedules(congregation.id, 27).await,
            Err(AppError::BadRequest(_))
        ));
    }
}
