use chrono::{Datelike, NaiveDate, Weekday};
use sea_orm::DatabaseConnection;

use crate::{
    data::{cleaning::CleaningRepository, group::GroupRepository},
    error::AppError,
    model::cleaning::{
        CleaningAssignmentParam, CreateCleaningAssignmentParams, UpdateCleaningAssignmentParams,
    },
};

pub struct CleaningService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CleaningService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets cleaning weeks within an optional date range.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<CleaningAssignmentParam>, AppError> {
        let repo = CleaningRepository::new(self.db);

        let rows = repo.get_in_range(congregation_id, from, to).await?;

        Ok(rows
            .into_iter()
            .map(|(assignment, group)| {
                CleaningAssignmentParam::from_entity(
                    assignment,
                    group.map(|g| g.name).unwrap_or_default(),
                )
            })
            .collect())
    }

    /// Assigns a group to a cleaning week.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Week start is not a Monday, or the
    ///   group is not in this congregation
    /// - `Err(AppError::Conflict)` - The week already has a group
    pub async fn create(
        &self,
        params: CreateCleaningAssignmentParams,
    ) -> Result<CleaningAssignmentParam, AppError> {
        validate_week_start(params.week_start)?;

        let repo = CleaningRepository::new(self.db);
        let group = self
            .require_group(params.group_id, params.congregation_id)
            .await?;

        if repo
            .week_exists(params.congregation_id, params.week_start, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Week of {} already has a cleaning group",
                params.week_start
            )));
        }

        let assignment = repo.create(params).await?;

        Ok(CleaningAssignmentParam::from_entity(assignment, group.name))
    }

    /// Updates a cleaning week.
    /// Returns None if the row doesn't exist in this congregation.
    pub async fn update(
        &self,
        params: UpdateCleaningAssignmentParams,
    ) -> Result<Option<CleaningAssignmentParam>, AppError> {
        validate_week_start(params.week_start)?;

        let repo = CleaningRepository::new(self.db);
        let group = self
            .require_group(params.group_id, params.congregation_id)
            .await?;

        if repo
            .week_exists(params.congregation_id, params.week_start, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Week of {} already has a cleaning group",
                params.week_start
            )));
        }

        let Some(assignment) = repo.update(params).await? else {
            return Ok(None);
        };

        Ok(Some(CleaningAssignmentParam::from_entity(
            assignment, group.name,
        )))
    }

    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = CleaningRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    async fn require_group(
        &self,
        group_id: i32,
        congregation_id: i32,
    ) -> Result<entity::publisher_group::Model, AppError> {
        GroupRepository::new(self.db)
            .find_in_congregation(group_id, congregation_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Group {} does not exist", group_id)))
    }
}

fn validate_week_start(week_start: NaiveDate) -> Result<(), AppError> {
    if week_start.weekday() != Weekday::Mon {
        return Err(AppError::BadRequest(
            "Week start must be a Monday".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Tests that a week start that isn't a Monday is rejected.
    ///
    /// Expected: Err(BadRequest) for a Wednesday
    #[tokio::test]
    async fn rejects_non_monday_week_start() {
        let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let group = factory::create_group(db, congregation.id).await.unwrap();
        let service = CleaningService::new(db);

        let result = service
            .create(CreateCleaningAssignmentParams {
                congregation_id: congregation.id,
                week_start: date(2026, 3, 4),
                group_id: group.id,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that assigning a second group to the same week is rejected.
    ///
    /// Expected: Err(Conflict) for the duplicate week
    #[tokio::test]
    async fn rejects_duplicate_week() {
        let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let first_group = factory::create_group(db, congregation.id).await.unwrap();
        let second_group = factory::create_group(db, congregation.id).await.unwrap();
        let service = CleaningService::new(db);

        service
            .create(CreateCleaningAssignmentParams {
                congregation_id: congregation.id,
                week_start: date(2026, 3, 2),
                group_id: first_group.id,
            })
            .await
            .unwrap();

        let result = service
            .create(CreateCleaningAssignmentParams {
                congregation_id: congregation.id,
                week_start: date(2026, 3, 2),
                group_id: second_group.id,
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests that an unknown group is rejected before the conflict check.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_unknown_group() {
        let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = CleaningService::new(db);

        let result = service
            .create(CreateCleaningAssignmentParams {
                congregation_id: congregation.id,
                week_start: date(2026, 3, 2),
                group_id: 9999,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
