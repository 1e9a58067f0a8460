//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`ToduoSettings::default()`]
//! 2. If `~/.toduo/settings.json` exists, deep-merge user values over defaults
//! 3. Reject unknown log levels in the merged file values
//! 4. Apply `TODUO_*` environment variable overrides (highest priority)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::{Result, SettingsError};
use crate::types::{home_dir, ToduoSettings};

/// Resolve the path to the settings file (`~/.toduo/settings.json`).
pub fn settings_path() -> PathBuf {
    home_dir().join(".toduo").join("settings.json")
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<ToduoSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
///
/// A missing file yields defaults. Invalid JSON or an unknown log level is an error.
pub fn load_settings_from_path(path: &Path) -> Result<ToduoSettings> {
    let mut settings = read_settings_file(path)?;
    validate(&settings)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

fn read_settings_file(path: &Path) -> Result<ToduoSettings> {
    let defaults = serde_json::to_value(ToduoSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        deep_merge(defaults, user)
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    Ok(serde_json::from_value(merged)?)
}

fn validate(settings: &ToduoSettings) -> Result<()> {
    let logging = &settings.logging;
    if !is_log_level(&logging.level) {
        return Err(SettingsError::InvalidValue(format!(
            "logging.level: unknown level {:?}",
            logging.level
        )));
    }
    if let Some((module, level)) = logging.modules.iter().find(|(_, l)| !is_log_level(l)) {
        return Err(SettingsError::InvalidValue(format!(
            "logging.modules.{module}: unknown level {level:?}"
        )));
    }
    Ok(())
}

/// Whether `val` names a `tracing` level (`trace` through `error`, any case).
pub fn is_log_level(val: &str) -> bool {
    val.parse::<tracing::Level>().is_ok()
}

/// Recursive deep merge of two JSON values.
///
/// - Objects are merged recursively (source overrides target per-key)
/// - Arrays and primitives are replaced entirely by source
/// - Null values in source are skipped (preserving target)
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply `TODUO_*` environment variable overrides. Invalid values are ignored.
pub fn apply_env_overrides(settings: &mut ToduoSettings) {
    apply_overrides_from(settings, |name| std::env::var(name).ok());
}

fn apply_overrides_from(settings: &mut ToduoSettings, lookup: impl Fn(&str) -> Option<String>) {
    let read = |name: &str| lookup(name).filter(|v| !v.is_empty());

    if let Some(v) = read("TODUO_HOST") {
        settings.server.host = v;
    }
    if let Some(v) = read("TODUO_PORT") {
        match parse_u16_range(&v, 1, 65535) {
            Some(port) => settings.server.port = port,
            None => warn!(key = "TODUO_PORT", value = %v, "invalid port env var, ignoring"),
        }
    }
    if let Some(v) = read("TODUO_VAULT_DIR") {
        settings.vault.dir = PathBuf::from(v);
    }
    if let Some(v) = read("TODUO_LOG_LEVEL") {
        if is_log_level(&v) {
            settings.logging.level = v;
        } else {
            warn!(key = "TODUO_LOG_LEVEL", value = %v, "invalid log level env var, ignoring");
        }
    }
    if let Some(v) = read("TODUO_LOG_JSON") {
        match parse_bool(&v) {
            Some(b) => settings.logging.json = b,
            None => warn!(key = "TODUO_LOG_JSON", value = %v, "invalid boolean env var, ignoring"),
        }
    }
    if let Some(v) = read("TODUO_SEED_DEMO") {
        match parse_bool(&v) {
            Some(b) => settings.seed_demo_data = b,
            None => warn!(key = "TODUO_SEED_DEMO", value = %v, "invalid boolean env var, ignoring"),
        }
    }
}

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a string as a `u16` within a range.
pub fn parse_u16_range(val: &str, min: u16, max: u16) -> Option<u16> {
    let n: u16 = val.parse().ok()?;
    (n >= min && n <= max).then_some(n)
}
