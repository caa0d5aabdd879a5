use std::sync::Arc;

use menagerie_config::{AnimalsConfig, DatabaseConfig};

use crate::modules::animals::repository::{AnimalRepository, MySqlAnimalRepository};

/// Shared application state. The repository is the only handle to storage;
/// tests swap in an in-memory implementation.
#[derive(Clone)]
pub struct AppState {
    pub animals: Arc<dyn AnimalRepository>,
    pub animals_config: AnimalsConfig,
}

impl AppState {
    pub fn new<R>(animals: R, animals_config: AnimalsConfig) -> Self
    where
        R: AnimalRepository + 'static,
    {
        Self {
            animals: Arc::new(animals),
            animals_config,
        }
    }
}

/// Connects, pings, and creates the schema, in that order. Any error here is
/// meant to stop the process.
pub async fn init_app_state(
    database_config: &DatabaseConfig,
    animals_config: AnimalsConfig,
) -> anyhow::Result<AppState> {
    let pool = menagerie_db::init_db_pool(database_config).await?;
    menagerie_db::ping(&pool).await?;
    menagerie_db::ensure_schema(&pool, database_config.schema_mode).await?;

    Ok(AppState::new(
        MySqlAnimalRepository::new(pool),
        animals_config,
    ))
}
