use ministryboard::{
    ai::ExtractionClient, config::Config, router, scheduler::cart_projection,
    service::setup_code::SetupCodeService, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    let extraction = ExtractionClient::new(
        http_client.clone(),
        config.anthropic_api_key.clone(),
        config.anthropic_model.clone(),
    );
    let setup_codes = SetupCodeService::new();

    // Print a setup code when this is a fresh instance with no users.
    startup::check_for_setup(&db, &setup_codes, &config.app_url).await?;

    // Keep fixed cart schedules topped up in the background.
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = cart_projection::start_scheduler(scheduler_db).await {
            tracing::error!("Cart schedule scheduler error: {}", e);
        }
    });

    tracing::info!("Starting server on {}", config.bind_addr);

    let app = router::router(AppState::new(
        db,
        http_client,
        extraction,
        setup_codes,
        config.app_url.clone(),
    ))?
    .layer(session);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
