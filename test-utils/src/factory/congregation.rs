use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a congregation with default values.
///
/// Defaults: unique name, meeting on Saturday (weekday 5) at 10:00.
pub async fn create_congregation(
    db: &DatabaseConnection,
) -> Result<entity::congregation::Model, DbErr> {
    let id = next_id();

    entity::congregation::ActiveModel {
        name: ActiveValue::Set(format!("Congregation {}", id)),
        city: ActiveValue::Set("Test City".to_string()),
        meeting_weekday: ActiveValue::Set(5),
        meeting_time: ActiveValue::Set("10:00".to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
