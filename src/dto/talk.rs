use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SpeakerDto {
    pub id: i32,
    pub name: String,
    pub congregation_name: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateSpeakerDto {
    pub name: String,
    pub congregation_name: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateSpeakerDto {
    pub name: String,
    pub congregation_name: String,
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TalkDto {
    pub id: i32,
    /// Public talk outline number.
    pub number: i32,
    pub theme: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTalkDto {
    pub number: i32,
    pub theme: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTalkDto {
    pub number: i32,
    pub theme: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TalkScheduleDto {
    pub id: i32,
    pub date: NaiveDate,
    pub speaker_id: i32,
    pub speaker_name: String,
    pub talk_id: Option<i32>,
    pub talk_theme: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTalkScheduleDto {
    /// "YYYY-MM-DD", must fall on the congregation's meeting weekday.
    pub date: String,
    pub speaker_id: i32,
    pub talk_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTalkScheduleDto {
    pub date: String,
    pub speaker_id: i32,
    pub talk_id: Option<i32>,
}
