//! Read-only user preference sources.
//!
//! The factory reads previously chosen display defaults through
//! [`PreferenceSource`] instead of reaching into global state.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PeripheralError, Result};
use crate::peripheral::M5StackColor;

/// Keys the registry reads from a preference source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKey {
    /// Text color last chosen for M5Stack devices.
    M5StackTextColor,
    /// BLE password shared with M5Stack firmware.
    M5StackBlePassword,
}

impl PreferenceKey {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M5StackTextColor => "m5stack_text_color",
            Self::M5StackBlePassword => "m5stack_ble_password",
        }
    }
}

impl fmt::Display for PreferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only key-value preference source.
pub trait PreferenceSource {
    /// Raw value stored under `key`, if any.
    fn get(&self, key: PreferenceKey) -> Result<Option<String>>;

    /// Stored M5Stack text color.
    ///
    /// Values that do not name a known color are logged and treated as absent.
    fn m5stack_text_color(&self) -> Result<Option<M5StackColor>> {
        let Some(raw) = self.get(PreferenceKey::M5StackTextColor)? else {
            return Ok(None);
        };
        match raw.parse() {
            Ok(color) => Ok(Some(color)),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring unparseable M5Stack text color preference");
                Ok(None)
            }
        }
    }

    /// Stored M5Stack BLE password. Empty values count as absent.
    fn m5stack_ble_password(&self) -> Result<Option<String>> {
        Ok(self
            .get(PreferenceKey::M5StackBlePassword)?
            .filter(|p| !p.is_empty()))
    }
}

/// In-memory preference source.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<PreferenceKey, String>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: PreferenceKey, value: impl Into<String>) -> Self {
        self.values.insert(key, value.into());
        self
    }

    pub fn set(&mut self, key: PreferenceKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }
}

impl PreferenceSource for MemoryPreferences {
    fn get(&self, key: PreferenceKey) -> Result<Option<String>> {
        Ok(self.values.get(&key).cloned())
    }
}

/// On-disk layout of the preferences file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PreferencesFile {
    m5stack_text_color: Option<String>,
    m5stack_ble_password: Option<String>,
}

/// Preferences loaded from a TOML file.
///
/// ```toml
/// m5stack_text_color = "yellow"
/// m5stack_ble_password = "s3cret"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlPreferences {
    path: Option<PathBuf>,
    file: PreferencesFile,
}

impl TomlPreferences {
    /// Load preferences from `path`. A missing file yields empty preferences.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No preferences file, using defaults");
            return Ok(Self {
                path: Some(path.to_path_buf()),
                file: PreferencesFile::default(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let mut prefs = Self::parse(&contents).map_err(|e| match e {
            PeripheralError::PreferencesParse(msg) => {
                PeripheralError::PreferencesParse(format!("{}: {msg}", path.display()))
            }
            other => other,
        })?;
        prefs.path = Some(path.to_path_buf());
        debug!(path = %path.display(), "Loaded preferences");
        Ok(prefs)
    }

    /// Parse preferences from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let file: PreferencesFile =
            toml::from_str(contents).map_err(|e| PeripheralError::PreferencesParse(e.to_string()))?;
        Ok(Self { path: None, file })
    }

    /// File the preferences were loaded from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceSource for TomlPreferences {
    fn get(&self, key: PreferenceKey) -> Result<Option<String>> {
        let value = match key {
            PreferenceKey::M5StackTextColor => &self.file.m5stack_text_color,
            PreferenceKey::M5StackBlePassword => &self.file.m5stack_ble_password,
        };
        Ok(value.clone())
    }
}
