use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
    model::app::AppState,
    upstream::{esi::EsiClient, structure::StructureFeedClient},
};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured log level when it is set.
pub fn init_tracing(config: &Config) -> Result<(), Error> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.log_level).map_err(|e| ConfigError::InvalidEnvValue {
                var: "STATIC_DATA_LOG_LEVEL".to_string(),
                reason: e.to_string(),
            })?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::InternalError(format!("Failed to install tracing subscriber: {}", e)))
}

/// Connect to the cache database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(format!("sqlite://{}?mode=rwc", config.db_path));
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the upstream clients and the shared application state
pub fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    let esi_client = EsiClient::new(&config.esi_base_url(), &config.user_agent)?;
    let structure_client =
        StructureFeedClient::new(&config.structure_base_url(), &config.user_agent)?;

    Ok(AppState {
        db,
        esi_client,
        structure_client,
        classifier: config.classifier,
    })
}
