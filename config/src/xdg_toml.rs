//! Load `[env]` table from `<config home>/<app>/config.toml`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::LoadError;

/// `$XDG_CONFIG_HOME` when set and non-empty, else the platform config directory.
pub fn config_home() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

#[derive(serde::Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
}

/// Returns key-value pairs from the `[env]` section. No config home, missing file or
/// missing section all yield an empty map.
pub fn load_env_map(
    config_home: Option<&Path>,
    app_name: &str,
) -> Result<HashMap<String, String>, LoadError> {
    let Some(home) = config_home else {
        return Ok(HashMap::new());
    };
    let path = home.join(app_name).join("config.toml");
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.env)
}
