use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CongregationDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    /// 0 = Monday .. 6 = Sunday.
    pub meeting_weekday: i32,
    /// "HH:MM"
    pub meeting_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateCongregationDto {
    pub name: String,
    pub city: String,
    pub meeting_weekday: i32,
    pub meeting_time: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateCongregationDto {
    pub name: String,
    pub city: String,
    pub meeting_weekday: i32,
    pub meeting_time: String,
}
