//! API data-transfer objects.
//!
//! These are the JSON shapes of the HTTP API, kept separate from the
//! server-side parameter models in `crate::model`. Input DTOs carry dates and
//! times as strings which controllers parse and validate; output DTOs use
//! `chrono::NaiveDate`, which serializes to ISO "YYYY-MM-DD".

pub mod api;
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
