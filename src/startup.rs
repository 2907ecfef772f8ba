use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    config::Config, data::user::UserRepository, error::AppError,
    service::setup_code::SetupCodeService,
};

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up to date before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect or migrate
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the same SQLite database.
///
/// Creates (or migrates) the session table and returns the tower-sessions
/// layer with a seven-day inactivity expiry.
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let session_store = SqliteStore::new(pool);
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Session store migration failed: {}", e)))?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Builds the HTTP client used for external API calls.
///
/// Redirects are disabled; the only outbound call this application makes is
/// to the document-extraction API, which never redirects.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Generates and logs a setup code when no user account exists yet.
///
/// First-run experience: whoever reads the server log can complete setup
/// through the setup endpoint and become the first admin. On subsequent
/// starts with existing users this does nothing.
pub async fn check_for_setup(
    db: &DatabaseConnection,
    setup_codes: &SetupCodeService,
    app_url: &str,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.count_all().await? > 0 {
        return Ok(());
    }

    let code = setup_codes.generate().await;

    tracing::info!(
        "No users found. Complete first-time setup by POSTing to {}/api/auth/setup with code: {}",
        app_url,
        code
    );

    Ok(())
}
