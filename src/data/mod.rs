//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and leave DTO conversion to the layers above. All
//! database queries, inserts, updates, and deletes are performed through
//! these repositories.

pub mod cart;
pub mod cleaning;
pub mod congregation;
pub mod duty;
pub mod group;
pub mod permission;
pub mod program;
pub mod publisher;
pub mod talk;
pub mod territory;
pub mod user;

#[cfg(test)]
mod test;
