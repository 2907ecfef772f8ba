//! Setup code service for first-time admin creation.
//!
//! When the server starts with an empty user table it generates a one-time
//! setup code and prints it to the log. Whoever submits that code through the
//! setup endpoint becomes the congregation's first admin. Codes live in
//! memory with a short TTL and are invalidated after successful use or
//! expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Time-to-live for setup codes in seconds.
const SETUP_CODE_TTL_SECONDS: u64 = 15 * 60;

/// Stored setup code with expiration timestamp.
#[derive(Clone)]
struct SetupCode {
    code: String,
    expires_at: Instant,
}

impl SetupCode {
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + Duration::from_secs(SETUP_CODE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the one-time setup code used for initial admin
/// creation.
///
/// The code is generated once on server startup if no user exists, stored in
/// memory with a 15-minute TTL, and invalidated after successful use or
/// expiration. This allows secure first-time setup without pre-configured
/// credentials.
#[derive(Clone)]
pub struct SetupCodeService {
    /// The currently active setup code, if any.
    code: Arc<RwLock<Option<SetupCode>>>,
}

impl SetupCodeService {
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random setup code and stores it with the TTL.
    ///
    /// Any previously generated code is replaced. The code can be validated
    /// once using `validate_and_consume`.
    ///
    /// # Returns
    /// - `String` - The generated 32-character setup code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        let setup_code = SetupCode::new(code_string.clone());
        *self.code.write().await = Some(setup_code);
        code_string
    }

    /// Validates the provided code against the stored setup code.
    ///
    /// On success the code is invalidated so it cannot be reused. Expired
    /// codes are also invalidated and fail validation.
    ///
    /// # Returns
    /// - `true` - Code matches and was valid; code has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a random 32-character alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| {
                let idx = rng.random_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect()
    }

    /// Checks if a valid (non-expired) code is currently stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for SetupCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests generating a new setup code.
    ///
    /// Expected: Ok with 32-character code and valid code state
    #[tokio::test]
    async fn generates_code() {
        let service = SetupCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(service.has_valid_code().await);
    }

    /// Tests validating the correct setup code.
    ///
    /// Expected: validation succeeds and the code is consumed
    #[tokio::test]
    async fn validates_and_consumes_correct_code() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests validating an incorrect setup code.
    ///
    /// Expected: validation fails and the stored code survives
    #[tokio::test]
    async fn rejects_incorrect_code() {
        let service = SetupCodeService::new();
        service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.has_valid_code().await);
    }

    /// Tests validating when no code exists.
    ///
    /// Expected: validation fails
    #[tokio::test]
    async fn rejects_when_no_code_exists() {
        let service = SetupCodeService::new();
        assert!(!service.validate_and_consume("any_code").await);
    }

    /// Tests that setup codes cannot be reused.
    ///
    /// Expected: first validation succeeds, second fails
    #[tokio::test]
    async fn code_cannot_be_reused() {
        let service = SetupCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.validate_and_consume(&code).await);
    }

    /// Tests that regenerating replaces the previous code.
    ///
    /// Expected: old code fails, new code succeeds
    #[tokio::test]
    async fn regenerating_replaces_previous_code() {
        let service = SetupCodeService::new();
        let old_code = service.generate().await;
        let new_code = service.generate().await;

        assert!(!service.validate_and_consume(&old_code).await);
        assert!(service.validate_and_consume(&new_code).await);
    }
}
