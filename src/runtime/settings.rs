use crate::config;

/// Load settings, falling back to defaults. A broken config file should not
/// keep the player from starting.
///
/// The second value explains a fallback. Logging is configured from these
/// settings, so the caller logs it once the subscriber is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
