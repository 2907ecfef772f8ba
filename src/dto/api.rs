use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response body returned by every non-2xx endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}
