//! SeaORM entity models for the ministryboard database schema.
//!
//! One module per table. Every scheduling table is scoped to a congregation,
//! either directly through a `congregation_id` column or transitively through
//! its parent (cart slots via their location, program parts via their
//! program).

pub mod prelude;

pub mod cart_assignment;
pub mod cart_location;
pub mod cart_slot;
pub mod cleaning_assignment;
pub mod congregation;
pub mod duty_assignment;
pub mod meeting_program;
pub mod permission;
pub mod program_part;
pub mod publisher;
pub mod publisher_group;
pub mod speaker;
pub mod talk;
pub mod talk_schedule;
pub mod territory;
pub mod territory_assignment;
pub mod user;
