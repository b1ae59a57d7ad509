//! Default file locations and user path expansion.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{PeripheralError, Result};
use crate::store::default_db_path;

/// Resolved file locations for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub database: PathBuf,
    pub preferences: PathBuf,
}

impl Paths {
    /// Resolve paths, preferring explicit overrides over the defaults.
    pub fn resolve(database: Option<&Path>, preferences: Option<&Path>) -> Result<Self> {
        let database = match database {
            Some(p) => expand_home(p)?,
            None => default_db_path()?,
        };
        let preferences = match preferences {
            Some(p) => expand_home(p)?,
            None => default_preferences_path()?,
        };
        debug!(
            database = %database.display(),
            preferences = %preferences.display(),
            "Resolved paths"
        );
        Ok(Self {
            database,
            preferences,
        })
    }
}

/// Default preferences file: `<config_dir>/periph/preferences.toml`.
pub fn default_preferences_path() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("periph").join("preferences.toml"))
        .ok_or_else(|| PeripheralError::Other("Could not determine config directory".to_string()))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    if path_str != "~" && !path_str.starts_with("~/") {
        return Ok(path.to_path_buf());
    }

    let home = dirs::home_dir()
        .ok_or_else(|| PeripheralError::Other("Could not determine home directory".to_string()))?;
    let rest = path_str.strip_prefix("~/").unwrap_or("");
    let resolved = if rest.is_empty() { home } else { home.join(rest) };
    trace!(original = %path.display(), resolved = %resolved.display(), "Expanded home directory");
    Ok(resolved)
}
