//! Factories for seeding test rows with sensible defaults.
//!
//! Free functions cover the common case; the publisher factory offers a
//! builder for tests that need control over individual fields.

pub mod cart;
pub mod congregation;
pub mod group;
pub mod helpers;
pub mod publisher;
pub mod talk;
pub mod territory;

pub use cart::{create_location, create_slot, CartSlotFactory};
pub use congregation::create_congregation;
pub use group::create_group;
pub use publisher::{create_publisher, PublisherFactory};
pub use talk::{create_speaker, create_talk};
pub use territory::create_territory;
