//! Load configuration from XDG `config.toml` and project `.env`, then apply to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! Prompt Refinery reads `OPENAI_API_KEY`, `OPENAI_MODEL`, `OPENAI_BASE_URL` and
//! `REFINERY_ADDR` from the environment afterwards, so either file can hold them:
//!
//! ```toml
//! # ~/.config/prompt-refinery/config.toml
//! [env]
//! OPENAI_MODEL = "gpt-4o-mini"
//! ```

mod dotenv;
mod xdg_toml;

use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;

/// Directory name under the XDG config home.
pub const APP_NAME: &str = "prompt-refinery";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    DotenvRead(std::io::Error),
}

/// Keys that were set by [`load_and_apply`], grouped by the source that supplied them.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Applied {
    pub from_dotenv: Vec<String>,
    pub from_xdg: Vec<String>,
}

impl Applied {
    pub fn is_empty(&self) -> bool {
        self.from_dotenv.is_empty() && self.from_xdg.is_empty()
    }
}

/// Loads `.env` (from `override_dir` or the current directory) and
/// `$XDG_CONFIG_HOME/<app_name>/config.toml`, setting only keys not already in the environment.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Applied, LoadError> {
    let config_home = xdg_toml::config_home();
    load_and_apply_from(app_name, override_dir, config_home.as_deref())
}

/// Same as [`load_and_apply`] with an explicit config home instead of `XDG_CONFIG_HOME`.
pub fn load_and_apply_from(
    app_name: &str,
    dotenv_dir: Option<&Path>,
    config_home: Option<&Path>,
) -> Result<Applied, LoadError> {
    let xdg_map = xdg_toml::load_env_map(config_home, app_name)?;
    let dotenv_map = dotenv::load_env_map(dotenv_dir).map_err(LoadError::DotenvRead)?;

    let keys: BTreeSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    let mut applied = Applied::default();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key) {
            std::env::set_var(key, v);
            applied.from_dotenv.push(key.clone());
        } else if let Some(v) = xdg_map.get(key) {
            std::env::set_var(key, v);
            applied.from_xdg.push(key.clone());
        }
    }
    Ok(applied)
}
