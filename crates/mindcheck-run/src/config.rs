use std::path::PathBuf;

use mindcheck_instruments::labels::Locale;
use mindcheck_predict::config::PredictConfig;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_ENV: &str = "MINDCHECK_CONFIG";
const API_BASE_ENV: &str = "MINDCHECK_API_BASE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default)]
    pub predict: PredictConfig,
    #[serde(default)]
    pub locale: Locale,
}

fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("mindcheck").join("config.json"))
}

/// Load the config file, falling back to defaults when none exists.
/// `MINDCHECK_API_BASE` overrides the prediction service URL either way.
pub fn load_config() -> eyre::Result<RunConfig> {
    let path = config_path()?;

    let mut config = if path.exists() {
        let contents = std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

        // Parse as raw JSON so we can run migrations before deserializing.
        let json: serde_json::Value = serde_json::from_str(&contents)?;
        let on_disk_version = json
            .get("config_version")
            .and_then(|v| v.as_u64())
            .unwrap_or(0) as u32;

        let migrated = migrate(json, on_disk_version)?;
        serde_json::from_value(migrated)?
    } else {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        RunConfig {
            config_version: CURRENT_VERSION,
            ..RunConfig::default()
        }
    };

    if let Ok(base_url) = std::env::var(API_BASE_ENV) {
        tracing::info!(%base_url, "prediction service URL overridden from environment");
        config.predict.base_url = base_url;
    }

    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(
    mut json: serde_json::Value,
    from_version: u32,
) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION})"
        ));
    }

    // v0 → v1: top-level `api_base` moved to `predict.base_url`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(api_base) = obj.remove("api_base") {
            let predict = obj
                .entry("predict")
                .or_insert_with(|| serde_json::json!({}));
            if let Some(predict) = predict.as_object_mut() {
                predict.entry("base_url").or_insert(api_base);
            }
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (api_base moved to predict.base_url)");
    }

    Ok(json)
}
