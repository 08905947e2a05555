use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ADS_CONTROL__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    /// Quiet window for free-text query debouncing, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON key-value file backing the record collection.
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Namespace key under which the record collection is stored.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_chart_width")]
    pub width: f64,
    #[serde(default = "default_chart_height")]
    pub height: f64,
}

fn default_debounce_ms() -> u64 {
    250
}

fn default_storage_path() -> String {
    "ads_control.json".to_string()
}

fn default_namespace() -> String {
    "ads_control_v1".to_string()
}

fn default_chart_width() -> f64 {
    800.0
}

fn default_chart_height() -> f64 {
    300.0
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            namespace: default_namespace(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_chart_width(),
            height: default_chart_height(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            chart: ChartConfig::default(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ADS_CONTROL")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
