use chrono::{Datelike, NaiveDate, Weekday};
use sea_orm::DatabaseConnection;

use crate::{
    data::program::ProgramRepository,
    error::AppError,
    model::program::{
        CreateMeetingProgramParams, CreateProgramPartParams, MeetingProgramParam,
        ProgramPartParam, UpdateMeetingProgramParams, SECTIONS,
    },
};

/// Longest single part on the midweek program.
const MAX_PART_MINUTES: i32 = 60;

pub struct ProgramService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgramService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets programs in a week range, parts included.
    pub async fn get_in_range(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<MeetingProgramParam>, AppError> {
        let repo = ProgramRepository::new(self.db);

        let programs = repo.get_in_range(congregation_id, from, to).await?;

        let mut result = Vec::with_capacity(programs.len());
        for program in programs {
            let parts = repo
                .parts_for_program(program.id)
                .await?
                .into_iter()
                .map(ProgramPartParam::from_entity)
                .collect();
            result.push(MeetingProgramParam::from_entity(program, parts));
        }

        Ok(result)
    }

    pub async fn get_by_id(
        &self,
        id: i32,
        congregation_id: i32,
    ) -> Result<Option<MeetingProgramParam>, AppError> {
        let repo = ProgramRepository::new(self.db);

        let Some(program) = repo.find_in_congregation(id, congregation_id).await? else {
            return Ok(None);
        };

        let parts = repo
            .parts_for_program(program.id)
            .await?
            .into_iter()
            .map(ProgramPartParam::from_entity)
            .collect();

        Ok(Some(MeetingProgramParam::from_entity(program, parts)))
    }

    /// Creates a weekly program with its parts.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Week start not a Monday, unknown part
    ///   section, or a part duration out of range
    /// - `Err(AppError::Conflict)` - The week already has a program
    pub async fn create(
        &self,
        params: CreateMeetingProgramParams,
    ) -> Result<MeetingProgramParam, AppError> {
        validate_week_start(params.week_start)?;
        validate_parts(&params.parts)?;

        let repo = ProgramRepository::new(self.db);

        if repo
            .week_exists(params.congregation_id, params.week_start, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A program for the week of {} already exists",
                params.week_start
            )));
        }

        let congregation_id = params.congregation_id;
        let program = repo.create(params).await?;

        self.get_by_id(program.id, congregation_id)
            .await?
            .ok_or_else(|| {
                crate::error::internal::InternalError::MissingAfterInsert {
                    entity: "meeting program",
                    id: program.id,
                }
                .into()
            })
    }

    /// Updates a program, replacing its part list.
    /// Returns None if the program doesn't exist in this congregation.
    pub async fn update(
        &self,
        params: UpdateMeetingProgramParams,
    ) -> Result<Option<MeetingProgramParam>, AppError> {
        validate_week_start(params.week_start)?;
        validate_parts(&params.parts)?;

        let repo = ProgramRepository::new(self.db);

        if repo
            .week_exists(params.congregation_id, params.week_start, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A program for the week of {} already exists",
                params.week_start
            )));
        }

        let congregation_id = params.congregation_id;
        let id = params.id;

        if repo.update(params).await?.is_none() {
            return Ok(None);
        }

        self.get_by_id(id, congregation_id).await
    }

    /// Deletes a program and its parts (FK cascade).
    pub async fn delete(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = ProgramRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
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

fn validate_parts(parts: &[CreateProgramPartParams]) -> Result<(), AppError> {
    for part in parts {
        if !SECTIONS.contains(&part.section.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Unknown section '{}', expected one of: {}",
                part.section,
                SECTIONS.join(", ")
            )));
        }

        if part.duration_minutes < 1 || part.duration_minutes > MAX_PART_MINUTES {
            return Err(AppError::BadRequest(format!(
                "Part duration must be between 1 and {} minutes",
                MAX_PART_MINUTES
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn monday(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn params(
        congregation_id: i32,
        week_start: NaiveDate,
        section: &str,
        duration: i32,
    ) -> CreateMeetingProgramParams {
        CreateMeetingProgramParams {
            congregation_id,
            week_start,
            chairman_id: None,
            parts: vec![CreateProgramPartParams {
                section: section.to_string(),
                title: "Part".to_string(),
                duration_minutes: duration,
                assignee_id: None,
                assistant_id: None,
                position: 0,
            }],
        }
    }

    /// Tests that a second program for the same week is rejected.
    ///
    /// Expected: Err(Conflict)
    #[tokio::test]
    async fn rejects_duplicate_week() {
        let test = TestBuilder::new()
            .with_program_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = ProgramService::new(db);

        service
            .create(params(congregation.id, monday(2026, 3, 2), "treasures", 10))
            .await
            .unwrap();

        let result = service
            .create(params(congregation.id, monday(2026, 3, 2), "living", 10))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests section and duration validation.
    ///
    /// Expected: Err(BadRequest) for an unknown section and for a duration
    /// outside 1..=60
    #[tokio::test]
    async fn rejects_invalid_parts() {
        let test = TestBuilder::new()
            .with_program_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = ProgramService::new(db);

        let bad_section = service
            .create(params(congregation.id, monday(2026, 3, 2), "intermission", 10))
            .await;
        assert!(matches!(bad_section, Err(AppError::BadRequest(_))));

        let bad_duration = service
            .create(params(congregation.id, monday(2026, 3, 2), "living", 0))
            .await;
        assert!(matches!(bad_duration, Err(AppError::BadRequest(_))));
    }

    /// Tests that a non-Monday week start is rejected.
    ///
    /// Expected: Err(BadRequest) for a Saturday
    #[tokio::test]
    async fn rejects_non_monday_week() {
        let test = TestBuilder::new()
            .with_program_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = ProgramService::new(db);

        let result = service
            .create(params(congregation.id, monday(2026, 3, 7), "living", 10))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
