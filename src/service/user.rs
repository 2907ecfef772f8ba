use sea_orm::DatabaseConnection;

use crate::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, PaginatedUsers, UserParam},
    service::auth::hash_password,
};

/// Scope strings accepted in permission grants.
pub const VALID_SCOPES: &[&str] = &[
    "publishers",
    "territories",
    "carts",
    "cleaning",
    "duties",
    "programs",
    "talks",
];

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated users of the congregation with their scopes.
    pub async fn get_paginated(
        &self,
        congregation_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);
        let permission_repo = PermissionRepository::new(self.db);

        let (users, total) = user_repo
            .get_paginated(congregation_id, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            let scopes = permission_repo.scopes_for_user(user.id).await?;
            result.push(UserParam::from_entity(user, scopes));
        }

        Ok(PaginatedUsers {
            users: result,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Creates a user account with an initial scope set.
    ///
    /// # Returns
    /// - `Ok(user)` - Created user with scopes
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AppError::BadRequest)` - Unknown scope string
    pub async fn create(
        &self,
        congregation_id: i32,
        email: String,
        password: &str,
        name: String,
        admin: bool,
        scopes: Vec<String>,
    ) -> Result<UserParam, AppError> {
        validate_scopes(&scopes)?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A user with email '{}' already exists",
                email
            )));
        }

        let password_hash = hash_password(password)?;

        let user = user_repo
            .create(CreateUserParams {
                congregation_id,
                email,
                password_hash,
                name,
                admin,
            })
            .await?;

        let permission_repo = PermissionRepository::new(self.db);
        permission_repo.replace_scopes(user.id, &scopes).await?;
        let scopes = permission_repo.scopes_for_user(user.id).await?;

        Ok(UserParam::from_entity(user, scopes))
    }

    /// Replaces a user's permission scopes.
    ///
    /// # Returns
    /// - `Ok(user)` - User with the new scope set
    /// - `Err(AppError::NotFound)` - User not in this congregation
    /// - `Err(AppError::BadRequest)` - Unknown scope string
    pub async fn update_permissions(
        &self,
        congregation_id: i32,
        user_id: i32,
        scopes: Vec<String>,
    ) -> Result<UserParam, AppError> {
        validate_scopes(&scopes)?;

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .filter(|u| u.congregation_id == congregation_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let permission_repo = PermissionRepository::new(self.db);
        permission_repo.replace_scopes(user.id, &scopes).await?;
        let scopes = permission_repo.scopes_for_user(user.id).await?;

        Ok(UserParam::from_entity(user, scopes))
    }

    /// Deletes a user account.
    ///
    /// Admins cannot delete themselves; that would risk locking the
    /// congregation out of user management.
    ///
    /// # Returns
    /// - `Ok(true)` - Deleted
    /// - `Ok(false)` - User not found in this congregation
    pub async fn delete(
        &self,
        congregation_id: i32,
        user_id: i32,
        acting_user_id: i32,
    ) -> Result<bool, AppError> {
        if user_id == acting_user_id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.delete(user_id, congregation_id).await?)
    }
}

fn validate_scopes(scopes: &[String]) -> Result<(), AppError> {
    for scope in scopes {
        if !VALID_SCOPES.contains(&scope.as_str()) {
            return Err(AppError::BadRequest(format!("Unknown scope '{}'", scope)));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests that creating a user with an existing email is rejected.
    ///
    /// Expected: Err(Conflict) for the second registration
    #[tokio::test]
    async fn rejects_duplicate_email() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = UserService::new(db);

        service
            .create(
                congregation.id,
                "ana@example.org".to_string(),
                "password",
                "Ana".to_string(),
                false,
                vec![],
            )
            .await
            .unwrap();

        let result = service
            .create(
                congregation.id,
                "ana@example.org".to_string(),
                "password",
                "Another Ana".to_string(),
                false,
                vec![],
            )
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    /// Tests that unknown permission scopes are rejected.
    ///
    /// Expected: Err(BadRequest)
    #[tokio::test]
    async fn rejects_unknown_scope() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = UserService::new(db);

        let result = service
            .create(
                congregation.id,
                "bruno@example.org".to_string(),
                "password",
                "Bruno".to_string(),
                false,
                vec!["everything".to_string()],
            )
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests that users cannot delete their own account.
    ///
    /// Expected: Err(BadRequest) when acting on yourself
    #[tokio::test]
    async fn rejects_self_deletion() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = UserService::new(db);

        let user = service
            .create(
                congregation.id,
                "carla@example.org".to_string(),
                "password",
                "Carla".to_string(),
                true,
                vec![],
            )
            .await
            .unwrap();

        let result = service.delete(congregation.id, user.id, user.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    /// Tests replacing a user's scopes through the service.
    ///
    /// Expected: Ok with the new scope set attached
    #[tokio::test]
    async fn replaces_permissions() {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let congregation = factory::create_congregation(db).await.unwrap();
        let service = UserService::new(db);

        let user = service
            .create(
                congregation.id,
                "davi@example.org".to_string(),
                "password",
                "Davi".to_string(),
                false,
                vec!["carts".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(user.scopes, vec!["carts".to_string()]);

        let updated = service
            .update_permissions(
                congregation.id,
                user.id,
                vec!["programs".to_string(), "cleaning".to_string()],
            )
            .await
            .unwrap();

        assert_eq!(
            updated.scopes,
            vec!["cleaning".to_string(), "programs".to_string()]
        );
    }
}
