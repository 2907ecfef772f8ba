use chrono::NaiveDate;

use crate::dto::talk::{SpeakerDto, TalkDto, TalkScheduleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerParam {
    pub id: i32,
    pub name: String,
    pub congregation_name: String,
    pub phone: Option<String>,
}

impl SpeakerParam {
    pub fn from_entity(entity: entity::speaker::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            congregation_name: entity.congregation_name,
            phone: entity.phone,
        }
    }

    pub fn into_dto(self) -> SpeakerDto {
        SpeakerDto {
            id: self.id,
            name: self.name,
            congregation_name: self.congregation_name,
            phone: self.phone,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSpeakerParams {
    pub congregation_id: i32,
    pub name: String,
    pub congregation_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateSpeakerParams {
    pub id: i32,
    pub congregation_id: i32,
    pub name: String,
    pub congregation_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TalkParam {
    pub id: i32,
    pub number: i32,
    pub theme: String,
}

impl TalkParam {
    pub fn from_entity(entity: entity::talk::Model) -> Self {
        Self {
            id: entity.id,
            number: entity.number,
            theme: entity.theme,
        }
    }

    pub fn into_dto(self) -> TalkDto {
        TalkDto {
            id: self.id,
            number: self.number,
            theme: self.theme,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTalkParams {
    pub congregation_id: i32,
    pub number: i32,
    pub theme: String,
}

#[derive(Debug, Clone)]
pub struct UpdateTalkParams {
    pub id: i32,
    pub congregation_id: i32,
    pub number: i32,
    pub theme: String,
}

/// A scheduled public talk with speaker and theme resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TalkScheduleParam {
    pub id: i32,
    pub date: NaiveDate,
    pub speaker_id: i32,
    pub speaker_name: String,
    pub talk_id: Option<i32>,
    pub talk_theme: Option<String>,
}

impl TalkScheduleParam {
    pub fn from_entity(
        entity: entity::talk_schedule::Model,
        speaker_name: String,
        talk_theme: Option<String>,
    ) -> Self {
        Self {
            id: entity.id,
            date: entity.date,
            speaker_id: entity.speaker_id,
            speaker_name,
            talk_id: entity.talk_id,
            talk_theme,
        }
    }

    pub fn into_dto(self) -> TalkScheduleDto {
        TalkScheduleDto {
            id: self.id,
            date: self.date,
            speaker_id: self.speaker_id,
            speaker_name: self.speaker_name,
            talk_id: self.talk_id,
            talk_theme: self.talk_theme,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTalkScheduleParams {
    pub congregation_id: i32,
    pub date: NaiveDate,
    pub speaker_id: i32,
    pub talk_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct UpdateTalkScheduleParams {
    pub id: i32,
    pub congregation_id: i32,
    pub date: NaiveDate,
    pub speaker_id: i32,
    pub talk_id: Option<i32>,
}
