use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test publishers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let publisher = PublisherFactory::new(&db, congregation.id)
///     .name("Ana Souza")
///     .privilege("elder")
///     .build()
///     .await?;
/// ```
pub struct PublisherFactory<'a> {
    db: &'a DatabaseConnection,
    congregation_id: i32,
    group_id: Option<i32>,
    name: String,
    privilege: String,
    pioneer: bool,
    active: bool,
}

impl<'a> PublisherFactory<'a> {
    /// Creates a factory with defaults: unique name, plain publisher
    /// privilege, not a pioneer, active.
    pub fn new(db: &'a DatabaseConnection, congregation_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            congregation_id,
            group_id: None,
            name: format!("Publisher {}", id),
            privilege: "publisher".to_string(),
            pioneer: false,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn group_id(mut self, group_id: i32) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn privilege(mut self, privilege: impl Into<String>) -> Self {
        self.privilege = privilege.into();
        self
    }

    pub fn pioneer(mut self, pioneer: bool) -> Self {
        self.pioneer = pioneer;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::publisher::Model, DbErr> {
        entity::publisher::ActiveModel {
            congregation_id: ActiveValue::Set(self.congregation_id),
            group_id: ActiveValue::Set(self.group_id),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            privilege: ActiveValue::Set(self.privilege),
            pioneer: ActiveValue::Set(self.pioneer),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a publisher with default values.
pub async fn create_publisher(
    db: &DatabaseConnection,
    congregation_id: i32,
) -> Result<entity::publisher::Model, DbErr> {
    PublisherFactory::new(db, congregation_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_publisher_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_publisher_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = crate::factory::create_congregation(db).await?;
        let publisher = create_publisher(db, congregation.id).await?;

        assert!(!publisher.name.is_empty());
        assert_eq!(publisher.privilege, "publisher");
        assert!(publisher.active);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_publishers() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_publisher_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = crate::factory::create_congregation(db).await?;
        let first = create_publisher(db, congregation.id).await?;
        let second = create_publisher(db, congregation.id).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.name, second.name);

        Ok(())
    }
}
