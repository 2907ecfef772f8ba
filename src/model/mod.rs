//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary, so SeaORM types never
//! leak into controllers and JSON shapes never leak into the data layer.

pub mod cart;
pub mod cleaning;
pub mod congregation;
pub mod duty;
pub mod group;
pub mod program;
pub mod publisher;
pub mod talk;
pub mod territory;
pub mod user;
