use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CleaningAssignmentDto {
    pub id: i32,
    /// Monday of the week the group is on duty.
    pub week_start: NaiveDate,
    pub group_id: i32,
    pub group_name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCleaningAssignmentDto {
    /// "YYYY-MM-DD", must be a Monday.
    pub week_start: String,
    pub group_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCleaningAssignmentDto {
    pub week_start: String,
    pub group_id: i32,
}
