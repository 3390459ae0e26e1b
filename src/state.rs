use account_master_config::{AdminConfig, CorsConfig};
use account_master_store::ProfileStore;

use crate::bootstrap::bootstrap_admin;

#[derive(Clone, Debug)]
pub struct AppState {
    pub store: ProfileStore,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(store: ProfileStore, cors_config: CorsConfig) -> Self {
        Self { store, cors_config }
    }
}

/// Builds the shared state from the environment, seeding the bootstrap
/// administrator when one is configured.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let store = ProfileStore::new();

    match AdminConfig::from_env() {
        Some(admin) => {
            bootstrap_admin(&store, &admin).await?;
        }
        None => {
            tracing::warn!("ADMIN_USERNAME/ADMIN_PASSWORD not set, starting with an empty store");
        }
    }

    Ok(AppState::new(store, CorsConfig::from_env()))
}
