//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading rule
//! settings from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RulesSettings;

/// Loads and provides access to rule settings.
///
/// The `ConfigLoader` reads YAML files from a directory and answers
/// tolerance/duration lookups, falling back from per-client overrides to
/// the system-wide settings.
///
/// # Directory Structure
///
/// ```text
/// config/embu/
/// ├── settings.yaml            # System-wide thresholds and limits
/// └── clients/
///     ├── mercado_central.yaml # Per-client overrides, keyed by file stem
///     └── farmacia_boa_vista.yaml
/// ```
///
/// The `clients/` directory is optional; without it every lookup resolves
/// to the system-wide settings.
///
/// # Example
///
/// ```no_run
/// use ponto_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/embu").unwrap();
///
/// let system = loader.settings();
/// println!("tolerance: {} min", system.tolerances.tolerance_minutes);
///
/// let client = loader.settings_for_client(Some("mercado_central"));
/// println!("client tolerance: {} min", client.tolerances.tolerance_minutes);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: RulesSettings,
    client_settings: HashMap<String, RulesSettings>,
}

impl ConfigLoader {
    /// Loads settings from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/embu")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if
    /// `settings.yaml` is missing, or any present file contains invalid
    /// YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = Self::load_yaml::<RulesSettings>(&settings_path)?;

        let clients_dir = path.join("clients");
        let client_settings = Self::load_clients(&clients_dir)?;

        Ok(Self {
            settings,
            client_settings,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every per-client override file, keyed by file stem.
    fn load_clients(clients_dir: &Path) -> EngineResult<HashMap<String, RulesSettings>> {
        let mut client_settings = HashMap::new();

        if !clients_dir.exists() {
            return Ok(client_settings);
        }

        let entries =
            fs::read_dir(clients_dir).map_err(|_| EngineError::ConfigNotFound {
                path: clients_dir.display().to_string(),
            })?;

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: clients_dir.display().to_string(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let settings = Self::load_yaml::<RulesSettings>(&path)?;
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    client_settings.insert(stem.to_string(), settings);
                }
            }
        }

        Ok(client_settings)
    }

    /// Returns the system-wide settings.
    pub fn settings(&self) -> &RulesSettings {
        &self.settings
    }

    /// Returns the settings that apply to the given client, falling back
    /// to the system-wide settings when the client has no override (or
    /// when no client is given).
    pub fn settings_for_client(&self, client: Option<&str>) -> &RulesSettings {
        client
            .and_then(|c| self.client_settings.get(c))
            .unwrap_or(&self.settings)
    }

    /// Returns the slugs of every client with an override on file.
    pub fn clients(&self) -> impl Iterator<Item = &str> {
        self.client_settings.keys().map(String::as_str)
    }
}
