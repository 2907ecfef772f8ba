use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{duty::DutyRepository, publisher::PublisherRepository},
    error::AppError,
    model::duty::{
        CreateDutyAssignmentParams, DutyAssignmentParam, UpdateDutyAssignmentParams, DUTIES,
    },
};

pub struct DutyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DutyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets duty assignments within an optional date range.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<DutyAssignmentParam>, AppError> {
        let repo = DutyRepository::new(self.db);

        let rows = repo.get_in_range(congregation_id, from, to).await?;

        Ok(rows
            .into_iter()
            .map(|(assignment, publisher)| {
                DutyAssignmentParam::from_entity(
                    assignment,
                    publisher.map(|p| p.name).unwrap_or_default(),
                )
            })
            .collect())
    }

    /// Assigns a publisher to a duty on a date.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Unknown duty kind, or publisher not
    ///   in this congregation
    /// - `Err(AppError::Conflict)` - The duty is already covered on that date
    pub async fn create(
        &self,
        params: CreateDutyAssignmentParams,
    ) -> Result<DutyAssignmentParam, AppError> {
        validate_duty(&params.duty)?;

        let repo = DutyRepository::new(self.db);
        let publisher = self
            .require_publisher(params.publisher_id, params.congregation_id)
            .await?;

        if repo
            .duty_exists_at(params.congregation_id, params.date, &params.duty, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Duty '{}' on {} is already assigned",
                params.duty, params.date
            )));
        }

        let assignment = repo.create(params).await?;

        Ok(DutyAssignmentParam::from_entity(assignment, publisher.name))
    }

    /// Updates a duty assignment.
    /// Returns None if the row doesn't exist in this congregation.
    pub async fn update(
        &self,
        params: UpdateDutyAssignmentParams,
    ) -> Result<Option<DutyAssignmentParam>, AppError> {
        validate_duty(&params.duty)?;

        let repo = DutyRepository::new(self.db);
        let publisher = self
            .require_publisher(params.publisher_id, params.congregation_id)
            .await?;

        if repo
            .duty_exists_at(
                params.congregation_id,
                params.date,
                &params.duty,
                Some(params.id),
            )
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Duty '{}' on {} is already assigned",
                params.duty, params.date
            )));
        }

        let Some(assignment) = repo.update(params).await? else {
            return Ok(None);
        };

        Ok(Some(DutyAssignmentParam::from_entity(
            assignment,
            publisher.name,
        )))
    }

    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = DutyRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    async fn require_publisher(
        &self,
        publisher_id: i32,
        congregation_id: i32,
    ) -> Result<entity::publisher::Model, AppError> {
        PublisherRepository::new(self.db)
            .find_in_congregation(publisher_id, congregation_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Publisher {} does not exist", publisher_id))
            })
    }
}

fn validate_duty(duty: &str) -> Result<(), AppError> {
    if !DUTIES.contains(&duty) {
        return Err(AppError::BadRequest(format!(
            "Unknown duty '{}', expected one of: {}",
            duty,
            DUTIES.join(", ")
        )));
    }

    Ok(())
}
