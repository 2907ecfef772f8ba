use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{publisher::PublisherRepository, territory::TerritoryRepository},
    error::AppError,
    model::territory::{
        AssignTerritoryParams, CreateTerritoryParams, TerritoryAssignmentParam, TerritoryParam,
        UpdateTerritoryParams,
    },
};

pub struct TerritoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TerritoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all territories with their checked-out state.
    pub async fn get_all(&self, congregation_id: i32) -> Result<Vec<TerritoryParam>, AppError> {
        let repo = TerritoryRepository::new(self.db);

        let territories = repo.get_all(congregation_id).await?;

        let mut result = Vec::with_capacity(territories.len());
        for territory in territories {
            let checked_out = repo.open_assignment(territory.id).await?.is_some();
            result.push(TerritoryParam::from_entity(territory, checked_out));
        }

        Ok(result)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<TerritoryParam>, AppError> {
        let repo = TerritoryRepository::new(self.db);

        let Some(territory) = repo.find_in_congregation(id, congregation_id).await? else {
            return Ok(None);
        };

        let checked_out = repo.open_assignment(territory.id).await?.is_some();

        Ok(Some(TerritoryParam::from_entity(territory, checked_out)))
    }

    /// Creates a territory.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Card number already taken
    pub async fn create(&self, params: CreateTerritoryParams) -> Result<TerritoryParam, AppError> {
        let repo = TerritoryRepository::new(self.db);

        if repo
            .number_exists(params.congregation_id, params.number, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Territory number {} already exists",
                params.number
            )));
        }

        let territory = repo.create(params).await?;

        Ok(TerritoryParam::from_entity(territory, false))
    }

    /// Updates a territory.
    /// Returns None if it doesn't exist in this congregation.
    pub async fn update(
        &self,
        params: UpdateTerritoryParams,
    ) -> Result<Option<TerritoryParam>, AppError> {
        let repo = TerritoryRepository::new(self.db);

        if repo
            .number_exists(params.congregation_id, params.number, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Territory number {} already exists",
                params.number
            )));
        }

        let Some(territory) = repo.update(params).await? else {
            return Ok(None);
        };

        let checked_out = repo.open_assignment(territory.id).await?.is_some();

        Ok(Some(TerritoryParam::from_entity(territory, checked_out)))
    }

    /// Deletes a territory and its assignment history (FK cascade).
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = TerritoryRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    /// Checks a territory out to a publisher.
    ///
    /// # Returns
    /// - `Ok(assignment)` - The new open assignment
    /// - `Err(AppError::NotFound)` - Territory not in this congregation
    /// - `Err(AppError::BadRequest)` - Publisher not in this congregation
    /// - `Err(AppError::Conflict)` - Territory already checked out
    pub async fn assign(
        &self,
        congregation_id: i32,
        territory_id: i32,
        publisher_id: i32,
        assigned_on: NaiveDate,
    ) -> Result<TerritoryAssignmentParam, AppError> {
        let repo = TerritoryRepository::new(self.db);
        let publisher_repo = PublisherRepository::new(self.db);

        if repo
            .find_in_congregation(territory_id, congregation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Territory not found".to_string()));
        }

        let Some(publisher) = publisher_repo
            .find_in_congregation(publisher_id, congregation_id)
            .await?
        else {
            return Err(AppError::BadRequest(format!(
                "Publisher {} does not exist",
                publisher_id
            )));
        };

        if repo.open_assignment(territory_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Territory is already checked out".to_string(),
            ));
        }

        let assignment = repo
            .create_assignment(AssignTerritoryParams {
                territory_id,
                publisher_id,
                assigned_on,
            })
            .await?;

        Ok(TerritoryAssignmentParam::from_entity(
            assignment,
            publisher.name,
        ))
    }

    /// Returns a checked-out territory.
    ///
    /// # Returns
    /// - `Ok(assignment)` - The closed assignment
    /// - `Err(AppError::NotFound)` - Territory not in this congregation
    /// - `Err(AppError::BadRequest)` - No open assignment, or the return
    ///   date is before the checkout date
    pub async fn return_territory(
        &self,
        congregation_id: i32,
        territory_id: i32,
        returned_on: NaiveDate,
    ) -> Result<TerritoryAssignmentParam, AppError> {
        let repo = TerritoryRepository::new(self.db);
        let publisher_repo = PublisherRepository::new(self.db);

        if repo
            .find_in_congregation(territory_id, congregation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Territory not found".to_string()));
        }

        let Some(open) = repo.open_assignment(territory_id).await? else {
            return Err(AppError::BadRequest(
                "Territory is not checked out".to_string(),
            ));
        };

        if returned_on < open.assigned_on {
            return Err(AppError::BadRequest(
                "Return date cannot be before the checkout date".to_string(),
            ));
        }

        let publisher_name = publisher_repo
            .find_in_congregation(open.publisher_id, congregation_id)
            .await?
            .map(|p| p.name)
            .unwrap_or_default();

        let closed = repo.close_assignment(open, returned_on).await?;

        Ok(TerritoryAssignmentParam::from_entity(closed, publisher_name))
    }

    /// Gets the assignment history of a territory, newest first.
    pub async fn assignment_history(
        &self,
        congregation_id: i32,
        territory_id: i32,
    ) -> Result<Vec<TerritoryAssignmentParam>, AppError> {
        let repo = TerritoryRepository::new(self.db);

        if repo
            .find_in_congregation(territory_id, congregation_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Territory not found".to_string()));
        }

        let history = repo.assignment_history(territory_id).await?;

        Ok(history
            .into_iter()
            .map(|(assignment, publisher)| {
                TerritoryAssignmentParam::from_entity(
                    assignment,
                    publisher.map(|p| p.name).unwrap_or_default(),
                )
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Tests that assigning a checked-out territory is rejected.
    ///
    /// Expected: Err(Conflict) for the second checkout
    #[tokio::test]
    async fn rejects_double_checkout() {
        let test = TestBuilder::new()
            .with_territory_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let territory = factory::create_territory(db, congregation.id).await.unwrap();
        let publisher = factory::create_publisher(db, congregation.id).await.unwrap();
        let service = TerritoryService::new(db);

        service
            .assign(congregation.id, territory.id, publisher.id, date(2026, 3, 2))
            .await
            .unwrap();

        let result = service
            .assign(congregation.id, territory.id, publisher.id, date(2026, 3, 9))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests that a territory can be reassigned after it was returned.
    ///
    /// Expected: Ok for the second checkout once the first is closed
    #[tokio::test]
    async fn allows_reassignment_after_return() {
        let test = TestBuilder::new()
            .with_territory_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let territory = factory::create_territory(db, congregation.id).await.unwrap();
        let publisher = factory::create_publisher(db, congregation.id).await.unwrap();
        let service = TerritoryService::new(db);

        service
            .assign(congregation.id, territory.id, publisher.id, date(2026, 3, 2))
            .await
            .unwrap();
        service
            .return_territory(congregation.id, territory.id, date(2026, 3, 30))
            .await
            .unwrap();

        let second = service
            .assign(congregation.id, territory.id, publisher.id, date(2026, 4, 6))
            .await;

        assert!(second.is_ok());
    }

    /// Tests that returning a territory that isn't checked out fails.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_return_without_checkout() {
        let test = TestBuilder::new()
            .with_territory_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let territory = factory::create_territory(db, congregation.id).await.unwrap();
        let service = TerritoryService::new(db);

        let result = service
            .return_territory(congregation.id, territory.id, date(2026, 3, 30))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that the return date cannot precede the checkout date.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_return_before_checkout_date() {
        let test = TestBuilder::new()
            .with_territory_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let territory = factory::create_territory(db, congregation.id).await.unwrap();
        let publisher = factory::create_publisher(db, congregation.id).await.unwrap();
        let service = TerritoryService::new(db);

        service
            .assign(congregation.id, territory.id, publisher.id, date(2026, 3, 9))
            .await
            .unwrap();

        let result = service
            .return_territory(congregation.id, territory.id, date(2026, 3, 2))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
