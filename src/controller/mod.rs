//! HTTP request handlers.
//!
//! Controllers check access through [`AuthGuard`](crate::middleware::auth::AuthGuard)
//! first, convert DTOs to server params, call the matching service and shape
//! the response. Every handler is scoped to the authenticated user's
//! congregation.

pub mod auth;
pub mod cart;
pub mod cleaning;
pub mod congregation;
pub mod duty;
pub mod group;
pub mod import;
pub mod program;
pub mod publisher;
pub mod talk;
pub mod territory;
pub mod user;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{error::AppError, util::parse::parse_date};

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Optional date-range filter shared by the schedule listings.
#[derive(Deserialize)]
pub struct RangeParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl RangeParams {
    /// Parses both bounds, rejecting malformed dates and inverted ranges.
    pub fn parse(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), AppError> {
        let from = self.from.as_deref().map(parse_date).transpose()?;
        let to = self.to.as_deref().map(parse_date).transpose()?;

        if let (Some(from), Some(to)) = (from, to) {
            if to < from {
                return Err(AppError::BadRequest(
                    "'to' date cannot be before 'from' date".to_string(),
                ));
            }
        }

        Ok((from, to))
    }
}
