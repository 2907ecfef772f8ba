use chrono::{Datelike, NaiveDate};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        congregation::CongregationRepository,
        talk::{SpeakerRepository, TalkRepository, TalkScheduleRepository},
    },
    error::AppError,
    model::talk::{
        CreateSpeakerParams, CreateTalkParams, CreateTalkScheduleParams, SpeakerParam, TalkParam,
        TalkScheduleParam, UpdateSpeakerParams, UpdateTalkParams, UpdateTalkScheduleParams,
    },
};

pub struct TalkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TalkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Speakers

    pub async fn get_speakers(&self, congregation_id: i32) -> Result<Vec<SpeakerParam>, AppError> {
        let repo = SpeakerRepository::new(self.db);

        let speakers = repo.get_all(congregation_id).await?;

        Ok(speakers.into_iter().map(SpeakerParam::from_entity).collect())
    }

    pub async fn create_speaker(
        &self,
        params: CreateSpeakerParams,
    ) -> Result<SpeakerParam, AppError> {
        let repo = SpeakerRepository::new(self.db);

        let speaker = repo.create(params).await?;

        Ok(SpeakerParam::from_entity(speaker))
    }

    /// Updates a speaker.
    /// Returns None if the speaker doesn't exist in this congregation.
    pub async fn update_speaker(
        &self,
        params: UpdateSpeakerParams,
    ) -> Result<Option<SpeakerParam>, AppError> {
        let repo = SpeakerRepository::new(self.db);

        Ok(repo.update(params).await?.map(SpeakerParam::from_entity))
    }

    /// Deletes a speaker and their scheduled talks (FK cascade).
    pub async fn delete_speaker(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = SpeakerRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    // Talk outlines

    pub async fn get_talks(&self, congregation_id: i32) -> Result<Vec<TalkParam>, AppError> {
        let repo = TalkRepository::new(self.db);

        let talks = repo.get_all(congregation_id).await?;

        Ok(talks.into_iter().map(TalkParam::from_entity).collect())
    }

    /// Adds a talk outline to the catalog.
    ///
    /// # Returns
    /// - `Err(AppError::Conflict)` - Outline number already in the catalog
    pub async fn create_talk(&self, params: CreateTalkParams) -> Result<TalkParam, AppError> {
        let repo = TalkRepository::new(self.db);

        if repo
            .number_exists(params.congregation_id, params.number, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Talk outline {} already exists",
                params.number
            )));
        }

        let talk = repo.create(params).await?;

        Ok(TalkParam::from_entity(talk))
    }

    /// Updates a talk outline.
    /// Returns None if the talk doesn't exist in this congregation.
    pub async fn update_talk(
        &self,
        params: UpdateTalkParams,
    ) -> Result<Option<TalkParam>, AppError> {
        let repo = TalkRepository::new(self.db);

        if repo
            .number_exists(params.congregation_id, params.number, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "Talk outline {} already exists",
                params.number
            )));
        }

        Ok(repo.update(params).await?.map(TalkParam::from_entity))
    }

    pub async fn delete_talk(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = TalkRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    // Schedule

    pub async fn get_schedule(
        &self,
        congregation_id: i32,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<TalkScheduleParam>, AppError> {
        let repo = TalkScheduleRepository::new(self.db);

        let rows = repo.get_in_range(congregation_id, from, to).await?;

        Ok(rows
            .into_iter()
            .map(|(scheduled, speaker, talk)| {
                TalkScheduleParam::from_entity(
                    scheduled,
                    speaker.map(|s| s.name).unwrap_or_default(),
                    talk.map(|t| t.theme),
                )
            })
            .collect())
    }

    /// Schedules a public talk.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Date not on the congregation's meeting
    ///   weekday, unknown speaker, or unknown outline
    /// - `Err(AppError::Conflict)` - The date already has a talk
    pub async fn create_schedule(
        &self,
        params: CreateTalkScheduleParams,
    ) -> Result<TalkScheduleParam, AppError> {
        let repo = TalkScheduleRepository::new(self.db);

        self.validate_meeting_day(params.congregation_id, params.date)
            .await?;
        let speaker = self
            .require_speaker(params.speaker_id, params.congregation_id)
            .await?;
        let talk = self
            .resolve_talk(params.talk_id, params.congregation_id)
            .await?;

        if repo
            .date_exists(params.congregation_id, params.date, None)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A talk is already scheduled on {}",
                params.date
            )));
        }

        let scheduled = repo.create(params).await?;

        Ok(TalkScheduleParam::from_entity(
            scheduled,
            speaker.name,
            talk.map(|t| t.theme),
        ))
    }

    /// Updates a scheduled talk.
    /// Returns None if the row doesn't exist in this congregation.
    pub async fn update_schedule(
        &self,
        params: UpdateTalkScheduleParams,
    ) -> Result<Option<TalkScheduleParam>, AppError> {
        let repo = TalkScheduleRepository::new(self.db);

        self.validate_meeting_day(params.congregation_id, params.date)
            .await?;
        let speaker = self
            .require_speaker(params.speaker_id, params.congregation_id)
            .await?;
        let talk = self
            .resolve_talk(params.talk_id, params.congregation_id)
            .await?;

        if repo
            .date_exists(params.congregation_id, params.date, Some(params.id))
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A talk is already scheduled on {}",
                params.date
            )));
        }

        let Some(scheduled) = repo.update(params).await? else {
            return Ok(None);
        };

        Ok(Some(TalkScheduleParam::from_entity(
            scheduled,
            speaker.name,
            talk.map(|t| t.theme),
        )))
    }

    pub async fn delete_schedule(&self, id: i32, congregation_id: i32) -> Result<bool, AppError> {
        let repo = TalkScheduleRepository::new(self.db);

        Ok(repo.delete(id, congregation_id).await?)
    }

    /// Checks that the date falls on the congregation's meeting weekday.
    async fn validate_meeting_day(
        &self,
        congregation_id: i32,
        date: NaiveDate,
    ) -> Result<(), AppError> {
        let congregation = CongregationRepository::new(self.db)
            .find_by_id(congregation_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Congregation not found".to_string()))?;

        let weekday = date.weekday().num_days_from_monday() as i32;
        if weekday != congregation.meeting_weekday {
            return Err(AppError::BadRequest(format!(
                "{} does not fall on the congregation's meeting day",
                date
            )));
        }

        Ok(())
    }

    async fn require_speaker(
        &self,
        speaker_id: i32,
        congregation_id: i32,
    ) -> Result<entity::speaker::Model, AppError> {
        SpeakerRepository::new(self.db)
            .find_in_congregation(speaker_id, congregation_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Speaker {} does not exist", speaker_id)))
    }

    async fn resolve_talk(
        &self,
        talk_id: Option<i32>,
        congregation_id: i32,
    ) -> Result<Option<entity::talk::Model>, AppError> {
        let Some(talk_id) = talk_id else {
            return Ok(None);
        };

        let talk = TalkRepository::new(self.db)
            .find_in_congregation(talk_id, congregation_id)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!("Talk outline {} does not exist", talk_id))
            })?;

        Ok(Some(talk))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    /// Tests that a talk scheduled off the meeting weekday is rejected.
    ///
    /// The factory congregation meets on Saturdays; 2026-03-04 is a
    /// Wednesday.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_wrong_weekday() {
        let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let speaker = factory::create_speaker(db, congregation.id).await.unwrap();
        let service = TalkService::new(db);

        let result = service
            .create_schedule(CreateTalkScheduleParams {
                congregation_id: congregation.id,
                date: date(2026, 3, 4),
                speaker_id: speaker.id,
                talk_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that a second talk on the same date is rejected.
    ///
    /// Expected: Err(Conflict); 2026-03-07 is a Saturday
    #[tokio::test]
    async fn rejects_duplicate_date() {
        let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let speaker = factory::create_speaker(db, congregation.id).await.unwrap();
        let service = TalkService::new(db);

        service
            .create_schedule(CreateTalkScheduleParams {
                congregation_id: congregation.id,
                date: date(2026, 3, 7),
                speaker_id: speaker.id,
                talk_id: None,
            })
            .await
            .unwrap();

        let result = service
            .create_schedule(CreateTalkScheduleParams {
                congregation_id: congregation.id,
                date: date(2026, 3, 7),
                speaker_id: speaker.id,
                talk_id: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests that a duplicate outline number is rejected.
    ///
    /// Expected: Err(Conflict) for the same number
    #[tokio::test]
    async fn rejects_duplicate_outline_number() {
        let test = TestBuilder::new().with_talk_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = TalkService::new(db);

        service
            .create_talk(CreateTalkParams {
                congregation_id: congregation.id,
                number: 42,
                theme: "First".to_string(),
            })
            .await
            .unwrap();

        let result = service
            .create_talk(CreateTalkParams {
                congregation_id: congregation.id,
                number: 42,
                theme: "Second".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
