use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    data::{permission::PermissionRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Access requirement checked by [`AuthGuard::require`].
///
/// `Admin` requires the user's admin flag. Every other variant names a module
/// scope that must be granted through a permission row; admins bypass scope
/// checks entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Publishers,
    Territories,
    Carts,
    Cleaning,
    Duties,
    Programs,
    Talks,
}

impl Permission {
    /// The permission-table scope string for this requirement, or `None` for
    /// the admin flag which lives on the user row.
    pub fn scope(&self) -> Option<&'static str> {
        match self {
            Self::Admin => None,
            Self::Publishers => Some("publishers"),
            Self::Territories => Some("territories"),
            Self::Carts => Some("carts"),
            Self::Cleaning => Some("cleaning"),
            Self::Duties => Some("duties"),
            Self::Programs => Some("programs"),
            Self::Talks => Some("talks"),
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the session to a user and checks the given requirements.
    ///
    /// Every listed permission must hold. Admin users satisfy any scope
    /// requirement without a permission row.
    ///
    /// # Returns
    /// - `Ok(user)` - The authenticated user satisfying all requirements
    /// - `Err(AuthError::NotLoggedIn)` - No user in session (401)
    /// - `Err(AuthError::AccessDenied)` - Missing admin flag or scope (403)
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission.scope() {
                None => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            scope: "admin".to_string(),
                        }
                        .into());
                    }
                }
                Some(scope) => {
                    if user.admin {
                        continue;
                    }

                    let permission_repo = PermissionRepository::new(self.db);
                    if !permission_repo.has_scope(user_id, scope).await? {
                        return Err(AuthError::AccessDenied {
                            user_id,
                            scope: scope.to_string(),
                        }
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
