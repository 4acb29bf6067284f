//! External dashboard configuration
//!
//! Credentials and the initial camera are deployment configuration, read
//! once at startup and passed through to the collaborators unmodified.

use std::path::Path;

use bv_core::state::MapViewState;
use bv_core::SourceDescriptor;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Access credentials for the hosted map service.
///
/// Opaque to this crate; the token is whatever the deployment provisioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub api_version: String,
    pub api_base_url: String,
    pub access_token: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            api_version: "v3".to_string(),
            api_base_url: "https://gcp-us-east1.api.carto.com".to_string(),
            access_token: String::new(),
        }
    }
}

/// Dashboard configuration: initial camera, basemap, credentials and an
/// optional override for the buildings source descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub view_state: MapViewState,
    pub basemap: String,
    pub credentials: Credentials,
    /// Replaces the built-in buildings tileset when set
    pub buildings_source: Option<SourceDescriptor>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            view_state: MapViewState::default(),
            basemap: "dark-matter".to_string(),
            credentials: Credentials::default(),
            buildings_source: None,
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from JSON text. Missing fields take defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "loaded dashboard configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_center_on_the_tileset() {
        let config = DashboardConfig::default();
        assert_eq!(config.view_state.latitude, 37.88);
        assert_eq!(config.view_state.longitude, -4.785);
        assert_eq!(config.view_state.zoom, 12.0);
        assert_eq!(config.credentials.api_version, "v3");
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = DashboardConfig::from_json(
            r#"{"view_state": {"zoom": 15.0}, "basemap": "dark-matter"}"#,
        )
        .unwrap();

        assert_eq!(config.view_state.zoom, 15.0);
        // Unspecified camera fields keep their defaults
        assert_eq!(config.view_state.latitude, 37.88);
        assert_eq!(config.basemap, "dark-matter");
        assert_eq!(config.credentials, Credentials::default());
    }

    #[test]
    fn source_override_parses() {
        let config = DashboardConfig::from_json(
            r#"{"buildings_source": {
                "id": "buildingsSource",
                "kind": "tileset",
                "connection": "bqconn",
                "data": "project.dataset.other_tileset"
            }}"#,
        )
        .unwrap();

        let source = config.buildings_source.unwrap();
        assert_eq!(source.data, "project.dataset.other_tileset");
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = DashboardConfig::default();
        config.credentials.access_token = "token-123".to_string();
        config.view_state.pitch = 45.0;

        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(DashboardConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(DashboardConfig::from_json("{not json").is_err());
    }
}
