use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a territory with a unique default card number.
pub async fn create_territory(
    db: &DatabaseConnection,
    congregation_id: i32,
) -> Result<entity::territory::Model, DbErr> {
    let id = next_id();

    entity::territory::ActiveModel {
        congregation_id: ActiveValue::Set(congregation_id),
        number: ActiveValue::Set(id),
        name: ActiveValue::Set(format!("Territory {}", id)),
        description: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
