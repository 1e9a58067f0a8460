//! # toduo-settings
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`ToduoSettings::default()`]
//! 2. **User file** — `~/.toduo/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `TODUO_*` overrides (highest priority)
//!
//! Command-line flags are applied on top by the binary.

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::{LoggingSettings, ServerSettings, ToduoSettings, VaultSettings};
