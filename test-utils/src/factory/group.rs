use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a publisher group with a unique default name.
pub async fn create_group(
    db: &DatabaseConnection,
    congregation_id: i32,
) -> Result<entity::publisher_group::Model, DbErr> {
    entity::publisher_group::ActiveModel {
        congregation_id: ActiveValue::Set(congregation_id),
        name: ActiveValue::Set(format!("Group {}", next_id())),
        ..Default::default()
    }
    .insert(db)
    .await
}
