use sea_orm::DatabaseConnection;

use crate::server::{
    config::ClassifierPolicy,
    upstream::{esi::EsiClient, structure::StructureFeedClient},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub esi_client: EsiClient,
    pub structure_client: StructureFeedClient,
    pub classifier: ClassifierPolicy,
}

/// Builds state against a single upstream base URL serving both the universe API and the
/// structure feed, with query classification.
impl From<(DatabaseConnection, String)> for AppState {
    fn from((db, base_url): (DatabaseConnection, String)) -> Self {
        let http = reqwest::Client::new();

        Self {
            db,
            esi_client: EsiClient::with_http_client(http.clone(), &base_url),
            structure_client: StructureFeedClient::with_http_client(http, &base_url),
            classifier: ClassifierPolicy::Query,
        }
    }
}
