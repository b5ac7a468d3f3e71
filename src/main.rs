use static_data::server::{
    config::Config, error::Error, router, scheduler::Scheduler, startup,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let state = startup::build_app_state(&config, db)?;

    let mut scheduler = Scheduler::new(state.clone()).await?;
    scheduler.start().await?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|e| Error::InternalError(format!("Failed to bind port {}: {}", config.port, e)))?;

    tracing::info!("Starting server on port {}", config.port);

    let app = router::routes().with_state(state);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    scheduler.stop().await?;

    served.map_err(|e| Error::InternalError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutdown signal received");
}
