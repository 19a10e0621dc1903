use school_manager::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client();
    let store = startup::connect_to_store(&config, http_client.clone());
    let identity = startup::connect_to_identity(&config, http_client);

    tracing::info!("Starting server on {}", config.bind_addr);

    let app = router::router()
        .with_state(AppState::new(store, identity))
        .layer(startup::cors_layer());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
