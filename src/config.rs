use crate::query::Query;
use crate::util::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/* Config */
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_query: Query,
    pub catalog_settings: CatalogSettings,
    pub output_settings: OutputSettings,
}

/* Remote Catalogs */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub simbad_url: String,
    pub vsp_url: String,
    pub skyview_url: String,
    pub request_interval_millis: u64,
    pub timeout_millis: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            simbad_url: SIMBAD_URL.to_string(),
            vsp_url: VSP_URL.to_string(),
            skyview_url: SKYVIEW_URL.to_string(),
            request_interval_millis: DEFAULT_REQUEST_INTERVAL_MILLIS,
            timeout_millis: DEFAULT_TIMEOUT_MILLIS,
        }
    }
}

impl CatalogSettings {
    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_millis)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_millis)
    }
}

/* Output Files */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    pub directory: PathBuf,
    pub download_dss: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("radec"),
            download_dss: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_file() {
        let config: Config = confy::load_path("tests/test_config.toml").unwrap();
        assert_eq!(config.default_query.object_id, "vega");
        assert_eq!(config.default_query.catalog_type, CatalogType::Vsp);
        assert_eq!(config.default_query.mag_band, "Ic");
        assert_eq!(config.catalog_settings.request_interval(), Duration::from_millis(250));
        assert_eq!(config.output_settings.directory, PathBuf::from("radec"));
        assert!(config.default_query.validated().is_ok());
    }

    #[test]
    fn test_default_settings() {
        let config = Config::default();
        assert_eq!(config.catalog_settings.simbad_url, SIMBAD_URL);
        assert_eq!(config.catalog_settings.timeout(), Duration::from_secs(30));
        assert!(!config.output_settings.download_dss);
    }
}
