use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ProgramPartDto {
    pub id: i32,
    /// "treasures", "ministry" or "living".
    pub section: String,
    pub title: String,
    pub duration_minutes: i32,
    pub assignee_id: Option<i32>,
    pub assistant_id: Option<i32>,
    pub position: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MeetingProgramDto {
    pub id: i32,
    /// Monday of the program week.
    pub week_start: NaiveDate,
    pub chairman_id: Option<i32>,
    pub parts: Vec<ProgramPartDto>,
}

/// Part payload for create/update; position is taken from array order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateProgramPartDto {
    pub section: String,
    pub title: String,
    pub duration_minutes: i32,
    pub assignee_id: Option<i32>,
    pub assistant_id: Option<i32>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMeetingProgramDto {
    /// "YYYY-MM-DD", must be a Monday.
    pub week_start: String,
    pub chairman_id: Option<i32>,
    pub parts: Vec<CreateProgramPartDto>,
}

/// Update payload; replaces the whole part list.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateMeetingProgramDto {
    pub week_start: String,
    pub chairman_id: Option<i32>,
    pub parts: Vec<CreateProgramPartDto>,
}
