use std::{env, path::PathBuf};

use super::schema::Settings;

/// Configuration loading helpers.
///
/// `Settings::load` tries environment variables first (prefix `TUNEBOX__`), then an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TUNEBOX")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.audio.initial_volume) {
            return Err("audio.initial_volume must be within 0.0..=1.0".to_string());
        }
        if self.audio.open_timeout_ms == 0 {
            return Err("audio.open_timeout_ms must be >= 1".to_string());
        }
        if !(self.ui.volume_step > 0.0 && self.ui.volume_step <= 1.0) {
            return Err("ui.volume_step must be within (0.0, 1.0]".to_string());
        }
        if self.library.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err("library.extensions must name at least one extension".to_string());
        }
        Ok(())
    }
}

/// Resolve the config path from `TUNEBOX_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNEBOX_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tunebox/config.toml`
/// or `~/.config/tunebox/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_home("XDG_CONFIG_HOME", ".config").map(|d| d.join("tunebox").join("config.toml"))
}

/// Compute the default log directory under `$XDG_STATE_HOME/tunebox`
/// or `~/.local/state/tunebox`.
pub fn default_log_dir() -> Option<PathBuf> {
    xdg_home("XDG_STATE_HOME", ".local/state").map(|d| d.join("tunebox"))
}

fn xdg_home(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(var) {
        Some(PathBuf::from(dir))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
