use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DutyAssignmentDto {
    pub id: i32,
    pub date: NaiveDate,
    /// "sound", "microphones", "platform" or "attendant".
    pub duty: String,
    pub publisher_id: i32,
    pub publisher_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDutyAssignmentDto {
    /// "YYYY-MM-DD"
    pub date: String,
    pub duty: String,
    pub publisher_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateDutyAssignmentDto {
    pub date: String,
    pub duty: String,
    pub publisher_id: i32,
}
