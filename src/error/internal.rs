use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or verification failed for a reason other than a
    /// mismatch (malformed PHC string, parameter error).
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("Password hash operation failed: {reason}")]
    PasswordHash {
        /// The underlying argon2 error, stringified.
        reason: String,
    },

    /// A row fetched immediately after insertion was missing.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to the client.
    #[error("{entity} {id} missing after insert")]
    MissingAfterInsert {
        /// Human-readable entity name.
        entity: &'static str,
        /// Primary key of the missing row.
        id: i32,
    },
}
