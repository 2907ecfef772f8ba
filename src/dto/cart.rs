use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CartLocationDto {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCartLocationDto {
    pub name: String,
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCartLocationDto {
    pub name: String,
    pub address: Option<String>,
}

/// Publisher listed on a cart slot.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CartPublisherDto {
    pub id: i32,
    pub name: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CartSlotDto {
    pub id: i32,
    pub location_id: i32,
    pub location_name: String,
    pub date: NaiveDate,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    pub fixed: bool,
    pub publishers: Vec<CartPublisherDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCartSlotDto {
    pub location_id: i32,
    /// "YYYY-MM-DD"
    pub date: String,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    #[serde(default)]
    pub fixed: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCartSlotDto {
    pub location_id: i32,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub fixed: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AssignCartSlotDto {
    pub publisher_id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GenerateSchedulesDto {
    /// How many weeks to project forward from the latest fixed week.
    pub weeks: u32,
}

/// Outcome of a projection run, for the endpoint response and the daily job
/// log line.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GenerateReportDto {
    pub created_slots: u32,
    pub copied_assignments: u32,
    /// Slots skipped because the (location, date, start time) already existed.
    pub skipped_slots: u32,
}
