use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TerritoryDto {
    pub id: i32,
    pub number: i32,
    pub name: String,
    pub description: Option<String>,
    /// True while an assignment without a return date exists.
    pub checked_out: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateTerritoryDto {
    pub number: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateTerritoryDto {
    pub number: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TerritoryAssignmentDto {
    pub id: i32,
    pub territory_id: i32,
    pub publisher_id: i32,
    pub publisher_name: String,
    pub assigned_on: NaiveDate,
    pub returned_on: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct AssignTerritoryDto {
    pub publisher_id: i32,
    /// "YYYY-MM-DD"
    pub assigned_on: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ReturnTerritoryDto {
    /// "YYYY-MM-DD"
    pub returned_on: String,
}
