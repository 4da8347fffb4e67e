use std::sync::Arc;

use anyhow::{Context, Result};

use super::{
    config::Config,
    database::{Store, init_redis},
    loader::{HttpScriptSource, ScriptLoader},
};

pub struct State {
    pub config: Config,
    pub store: Store,
    pub maps: ScriptLoader<HttpScriptSource>,
}

impl State {
    pub async fn new() -> Result<Arc<Self>> {
        let config = Config::load()?;

        let redis_connection = init_redis(&config.redis_url)
            .await
            .context("Failed to connect to Redis")?;
        let store = Store::redis(redis_connection, config.places_key.clone());

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Store) -> Arc<Self> {
        let source = HttpScriptSource::new(&config.maps_script_url, &config.maps_api_key)
            .with_local_copy(config.maps_script_path.clone());

        Arc::new(Self {
            config,
            store,
            maps: ScriptLoader::new(source),
        })
    }
}
