use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a visiting speaker with unique default values.
pub async fn create_speaker(
    db: &DatabaseConnection,
    congregation_id: i32,
) -> Result<entity::speaker::Model, DbErr> {
    let id = next_id();

    entity::speaker::ActiveModel {
        congregation_id: ActiveValue::Set(congregation_id),
        name: ActiveValue::Set(format!("Speaker {}", id)),
        congregation_name: ActiveValue::Set(format!("Congregation {}", id)),
        phone: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a talk outline with a unique default number.
pub async fn create_talk(
    db: &DatabaseConnection,
    congregation_id: i32,
) -> Result<entity::talk::Model, DbErr> {
    let id = next_id();

    entity::talk::ActiveModel {
        congregation_id: ActiveValue::Set(congregation_id),
        number: ActiveValue::Set(id),
        theme: ActiveValue::Set(format!("Theme {}", id)),
        ..Default::default()
    }
    .insert(db)
    .await
}
