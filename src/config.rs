use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use crate::core::{AnalysisSettings, ReferencePoint};
use crate::services::DataPaths;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8050 }

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    pub sales_path: PathBuf,
    pub suburb_coords_path: PathBuf,
    pub boundaries_path: PathBuf,
    #[serde(default = "default_boundary_id_property")]
    pub boundary_id_property: String,
}

fn default_boundary_id_property() -> String { crate::core::boundary::DEFAULT_ID_PROPERTY.to_string() }

impl DataSettings {
    /// Input paths, with relative ones resolved under `root` when given
    pub fn paths(&self, root: Option<&Path>) -> DataPaths {
        let resolve = |path: &PathBuf| match root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.clone(),
        };

        DataPaths {
            sales: resolve(&self.sales_path),
            suburb_coords: resolve(&self.suburb_coords_path),
            boundaries: resolve(&self.boundaries_path),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default = "default_reference_lat")]
    pub reference_lat: f64,
    #[serde(default = "default_reference_lon")]
    pub reference_lon: f64,
    #[serde(default = "default_min_history_years")]
    pub min_history_years: usize,
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_lat: default_reference_lat(),
            reference_lon: default_reference_lon(),
            min_history_years: default_min_history_years(),
            price_ceiling: default_price_ceiling(),
        }
    }
}

fn default_reference_lat() -> f64 { ReferencePoint::SYDNEY_CBD.lat }
fn default_reference_lon() -> f64 { ReferencePoint::SYDNEY_CBD.lon }
fn default_min_history_years() -> usize { crate::core::regression::DEFAULT_MIN_HISTORY_YEARS }
fn default_price_ceiling() -> f64 { crate::core::analyzer::DEFAULT_PRICE_CEILING }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with TRENDS_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., TRENDS__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Pipeline settings derived from the `analysis` and `data` sections
    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            reference: ReferencePoint::new(self.analysis.reference_lat, self.analysis.reference_lon),
            min_history_years: self.analysis.min_history_years,
            price_ceiling: self.analysis.price_ceiling,
            boundary_id_property: self.data.boundary_id_property.clone(),
        }
    }

    /// Input paths, resolved under the data root from the environment
    pub fn data_paths(&self) -> DataPaths {
        let root = data_root();
        self.data.paths(root.as_deref())
    }
}

fn environment() -> Environment {
    Environment::with_prefix("TRENDS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Directory relative data paths are resolved under
///
/// `TRENDS_DATA_ROOT` wins over the legacy `AUS_DATA_ROOT`.
fn data_root() -> Option<PathBuf> {
    use std::env;

    env::var("TRENDS_DATA_ROOT")
        .or_else(|_| env::var("AUS_DATA_ROOT"))
        .ok()
        .filter(|root| !root.is_empty())
        .map(PathBuf::from)
}
