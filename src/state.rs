//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned for each request through
//! Axum's state extraction. All fields are cheap to clone: the database
//! connection is a pool handle, the HTTP and extraction clients are
//! reference-counted internally, and the setup-code service wraps an `Arc`.

use sea_orm::DatabaseConnection;

use crate::{ai::ExtractionClient, service::setup_code::SetupCodeService};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    ///
    /// Configured without redirects to keep outbound calls predictable.
    pub http_client: reqwest::Client,

    /// Client for the AI document-extraction service used by PDF imports.
    pub extraction: ExtractionClient,

    /// Service holding the one-time first-admin setup code.
    pub setup_codes: SetupCodeService,

    /// Application base URL for generating links in log messages.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        extraction: ExtractionClient,
        setup_codes: SetupCodeService,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            extraction,
            setup_codes,
            app_url,
        }
    }
}
