use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order (referenced tables first), then
/// call `build()` to get a context with an in-memory SQLite database.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the SeaORM entity using
    /// SQLite syntax, foreign keys included.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables for user-account and permission tests.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Congregation)
            .with_table(User)
            .with_table(Permission)
    }

    /// Adds the tables for publisher and group tests.
    pub fn with_publisher_tables(self) -> Self {
        self.with_table(Congregation)
            .with_table(PublisherGroup)
            .with_table(Publisher)
    }

    /// Adds the tables for territory tests.
    pub fn with_territory_tables(self) -> Self {
        self.with_publisher_tables()
            .with_table(Territory)
            .with_table(TerritoryAssignment)
    }

    /// Adds the tables for cart scheduling tests.
    pub fn with_cart_tables(self) -> Self {
        self.with_publisher_tables()
            .with_table(CartLocation)
            .with_table(CartSlot)
            .with_table(CartAssignment)
    }

    /// Adds the tables for cleaning and duty roster tests.
    pub fn with_roster_tables(self) -> Self {
        self.with_publisher_tables()
            .with_table(CleaningAssignment)
            .with_table(DutyAssignment)
    }

    /// Adds the tables for meeting program tests.
    pub fn with_program_tables(self) -> Self {
        self.with_publisher_tables()
            .with_table(MeetingProgram)
            .with_table(ProgramPart)
    }

    /// Adds the tables for speaker and talk scheduling tests.
    pub fn with_talk_tables(self) -> Self {
        self.with_table(Congregation)
            .with_table(Speaker)
            .with_table(Talk)
            .with_table(TalkSchedule)
    }

    /// Builds the test context, creating all configured tables in order.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
