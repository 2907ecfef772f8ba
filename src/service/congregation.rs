use sea_orm::DatabaseConnection;

use crate::{
    data::congregation::CongregationRepository,
    error::AppError,
    model::congregation::{CongregationParam, UpdateCongregationParams},
};

pub struct CongregationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CongregationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's congregation.
    pub async fn get(&self, congregation_id: i32) -> Result<CongregationParam, AppError> {
        let repo = CongregationRepository::new(self.db);

        let congregation = repo
            .find_by_id(congregation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Congregation not found".to_string()))?;

        Ok(CongregationParam::from_entity(congregation))
    }

    /// Updates the congregation's name, city and meeting settings.
    ///
    /// The meeting weekday must be 0..=6 (Monday-based); the time must
    /// already be normalized "HH:MM".
    pub async fn update(
        &self,
        params: UpdateCongregationParams,
    ) -> Result<CongregationParam, AppError> {
        if !(0..=6).contains(&params.meeting_weekday) {
            return Err(AppError::BadRequest(
                "Meeting weekday must be between 0 (Monday) and 6 (Sunday)".to_string(),
            ));
        }

        let repo = CongregationRepository::new(self.db);

        let congregation = repo
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Congregation not found".to_string()))?;

        Ok(CongregationParam::from_entity(congregation))
    }
}
