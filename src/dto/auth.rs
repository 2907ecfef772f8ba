use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::congregation::CreateCongregationDto;

/// One-time bootstrap payload creating the congregation and its first admin.
///
/// The `code` must match the setup code printed to the server log at startup
/// when no admin user exists yet.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct SetupDto {
    pub code: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub congregation: CreateCongregationDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
