//! Authentication: first-time setup, email/password login, current user.
//!
//! Passwords are hashed with Argon2id. Test builds use reduced-cost
//! parameters so the hashing tests stay fast; production uses the library
//! defaults.

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use sea_orm::DatabaseConnection;

use crate::{
    data::{congregation::CongregationRepository, permission::PermissionRepository, user::UserRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::{
        congregation::CreateCongregationParams,
        user::{CreateUserParams, UserParam},
    },
    service::setup_code::SetupCodeService,
};

/// Parameters for the one-time setup operation.
pub struct SetupParams {
    pub code: String,
    pub email: String,
    pub password: String,
    pub name: String,
    pub congregation: CreateCongregationParams,
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Performs first-time setup: creates the congregation and its first
    /// admin user.
    ///
    /// The setup code printed to the server log must match; it is consumed on
    /// success. Refuses to run once any user exists.
    ///
    /// # Returns
    /// - `Ok(user)` - The created admin user
    /// - `Err(AuthError::InvalidSetupCode)` - Wrong, expired or consumed code
    /// - `Err(AppError::Conflict)` - A user already exists
    pub async fn setup(
        &self,
        setup_codes: &SetupCodeService,
        params: SetupParams,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.count_all().await? > 0 {
            return Err(AppError::Conflict(
                "Setup has already been completed".to_string(),
            ));
        }

        if !setup_codes.validate_and_consume(&params.code).await {
            return Err(AuthError::InvalidSetupCode.into());
        }

        let congregation = CongregationRepository::new(self.db)
            .create(params.congregation)
            .await?;

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                congregation_id: congregation.id,
                email: params.email,
                password_hash,
                name: params.name,
                admin: true,
            })
            .await?;

        Ok(user)
    }

    /// Verifies an email/password pair.
    ///
    /// # Returns
    /// - `Ok(user)` - Credentials match
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong
    ///   password; the two cases are indistinguishable to the caller
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Resolves a user entity into the API model with permission scopes
    /// attached.
    pub async fn with_scopes(&self, user: entity::user::Model) -> Result<UserParam, AppError> {
        let scopes = PermissionRepository::new(self.db)
            .scopes_for_user(user.id)
            .await?;

        Ok(UserParam::from_entity(user, scopes))
    }
}

/// Hashes a password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2_instance()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash {
            reason: e.to_string(),
        })?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC string.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(_)` - The stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash {
        reason: e.to_string(),
    })?;

    match argon2_instance().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash {
            reason: e.to_string(),
        }
        .into()),
    }
}

/// Returns an Argon2 instance configured for the build context.
///
/// Tests use minimal parameters for speed; they MUST NOT be used in
/// production. Release builds use the Argon2id defaults.
fn argon2_instance() -> Argon2<'static> {
    #[cfg(test)]
    {
        use argon2::{Algorithm, Params, Version};

        // Fast, insecure parameters for tests ONLY.
        let params = Params::new(1024, 1, 1, None).expect("valid Argon2 params for tests");
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }

    #[cfg(not(test))]
    {
        Argon2::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that hashing then verifying a password succeeds.
    ///
    /// Expected: Ok(true) for the right password
    #[test]
    fn hash_verify_round_trip() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(verify_password("correct horse battery staple", &hash).unwrap());
    }

    /// Tests that a wrong password fails verification without erroring.
    ///
    /// Expected: Ok(false)
    #[test]
    fn wrong_password_fails_verification() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert!(!verify_password("incorrect", &hash).unwrap());
    }

    /// Tests that two hashes of the same password differ (random salt).
    #[test]
    fn hashes_are_salted() {
        let first = hash_password("same password").unwrap();
        let second = hash_password("same password").unwrap();

        assert_ne!(first, second);
    }

    /// Tests that a malformed stored hash is an error, not a mismatch.
    ///
    /// Expected: Err, so callers can distinguish corruption from bad input
    #[test]
    fn malformed_hash_is_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
