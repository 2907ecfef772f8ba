use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a cart location with a unique default name.
pub async fn create_location(
    db: &DatabaseConnection,
    congregation_id: i32,
) -> Result<entity::cart_location::Model, DbErr> {
    entity::cart_location::ActiveModel {
        congregation_id: ActiveValue::Set(congregation_id),
        name: ActiveValue::Set(format!("Location {}", next_id())),
        address: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating cart slots with customizable fields.
pub struct CartSlotFactory<'a> {
    db: &'a DatabaseConnection,
    location_id: i32,
    date: NaiveDate,
    start_time: String,
    end_time: String,
    fixed: bool,
}

impl<'a> CartSlotFactory<'a> {
    /// Creates a factory with defaults: a fixed Monday in 2026, 09:00-11:00,
    /// not part of the fixed weekly template.
    pub fn new(db: &'a DatabaseConnection, location_id: i32) -> Self {
        Self {
            db,
            location_id,
            date: NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid default date"),
            start_time: "09:00".to_string(),
            end_time: "11:00".to_string(),
            fixed: false,
        }
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn start_time(mut self, start_time: impl Into<String>) -> Self {
        self.start_time = start_time.into();
        self
    }

    pub fn end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = end_time.into();
        self
    }

    pub fn fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub async fn build(self) -> Result<entity::cart_slot::Model, DbErr> {
        entity::cart_slot::ActiveModel {
            location_id: ActiveValue::Set(self.location_id),
            date: ActiveValue::Set(self.date),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            fixed: ActiveValue::Set(self.fixed),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a cart slot with default times on the given date.
pub async fn create_slot(
    db: &DatabaseConnection,
    location_id: i32,
    date: NaiveDate,
) -> Result<entity::cart_slot::Model, DbErr> {
    CartSlotFactory::new(db, location_id).date(date).build().await
}
