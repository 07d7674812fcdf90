use crate::domain::alert::AlertThresholds;
use serde::Deserialize;

pub const DEFAULT_CONFIG_BASE: &str = "config/fleet";
pub const ENV_PREFIX: &str = "FLEET";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub alerts: AlertThresholds,
}

/// Load configuration from an optional file (`{base}.toml`, `{base}.yaml`, ...)
/// layered under `FLEET_`-prefixed environment variables,
/// e.g. `FLEET_ALERTS__MAX_TEMPERATURE=100`.
pub fn load_app_config(base: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(base).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.alerts.validate()?;

    Ok(app_config)
}
