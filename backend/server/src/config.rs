use std::{env, fmt::Display, fs::read_to_string, path::PathBuf, str::FromStr};

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub redis_url: String,
    pub places_key: String,
    pub maps_api_key: String,
    pub maps_script_url: String,
    pub maps_script_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            port: try_load("RUST_PORT", "8080")?,
            redis_url: require("REDIS_URL")?,
            places_key: try_load("PLACES_KEY", "stockholm-places:places")?,
            maps_api_key: read_secret("MAPS_API_KEY")?,
            maps_script_url: try_load(
                "MAPS_SCRIPT_URL",
                "https://maps.googleapis.com/maps/api/js",
            )?,
            maps_script_path: var("MAPS_SCRIPT_PATH").ok().map(PathBuf::from),
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| ())
}

fn require(key: &str) -> Result<String> {
    var(key).map_err(|_| anyhow!("Invalid/Missing environment variable: {key}"))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| anyhow!("Invalid {key} value: {e}"))
}

/// Environment first, then the docker secret mount.
fn read_secret(secret_name: &str) -> Result<String> {
    if let Ok(value) = var(secret_name) {
        return Ok(value);
    }

    let path = format!("/run/secrets/{secret_name}");

    read_to_string(&path)
        .map(|s| s.trim().to_string())
        .map_err(|e| {
            warn!("Failed to read {secret_name} from file: {e}");
            e
        })
        .with_context(|| format!("Invalid/Missing secret: {secret_name}"))
}
