//! Ministryboard Test Utils
//!
//! Shared testing utilities for building unit and integration tests. This
//! crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for
//! seeding the rows most tests need.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::{Congregation, Publisher};
//!
//! #[tokio::test]
//! async fn test_publisher_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Congregation)
//!         .with_table(Publisher)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
