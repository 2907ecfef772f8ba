//! Permission repository for module-scope access control.
//!
//! Permissions are plain (user, scope) rows; a user may hold any number of
//! scopes. Admin users bypass scope checks entirely, which is handled in the
//! auth guard, not here.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct PermissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks whether the user holds the given scope.
    pub async fn has_scope(&self, user_id: i32, scope: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Permission::find()
            .filter(entity::permission::Column::UserId.eq(user_id))
            .filter(entity::permission::Column::Scope.eq(scope))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all scopes granted to the user, sorted for stable output.
    pub async fn scopes_for_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let mut scopes: Vec<String> = entity::prelude::Permission::find()
            .filter(entity::permission::Column::UserId.eq(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|p| p.scope)
            .collect();

        scopes.sort();

        Ok(scopes)
    }

    /// Replaces the user's scope set with the given list.
    ///
    /// Deletes all existing permission rows for the user and inserts one row
    /// per scope. Duplicate scopes in the input collapse to one row.
    pub async fn replace_scopes(&self, user_id: i32, scopes: &[String]) -> Result<(), DbErr> {
        entity::prelude::Permission::delete_many()
            .filter(entity::permission::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        let mut seen: Vec<&str> = Vec::new();
        for scope in scopes {
            if seen.contains(&scope.as_str()) {
                continue;
            }
            seen.push(scope);

            entity::permission::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                scope: ActiveValue::Set(scope.clone()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
