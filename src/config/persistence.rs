use std::fs;
use std::path::Path;

use super::NavBarConfig;
use crate::error::NavBarError;

/// Loads a RON config from `path`. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<NavBarConfig, NavBarError> {
    let contents = fs::read_to_string(path).map_err(|source| NavBarError::ConfigLoad {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| NavBarError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the config, falling back to defaults on any error.
pub fn load_config_or_default(path: &Path) -> NavBarConfig {
    match load_config(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using default nav bar config");
            NavBarConfig::default()
        }
    }
}

/// Writes the config as pretty RON, creating parent directories.
pub fn save_config(path: &Path, config: &NavBarConfig) -> Result<(), NavBarError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| NavBarError::ConfigSave {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, serialized).map_err(|source| NavBarError::ConfigSave {
        path: path.to_path_buf(),
        source,
    })
}
