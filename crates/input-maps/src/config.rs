//! Bindings file loading and saving.
//!
//! Files are JSON (`.json`) or YAML (`.yaml`/`.yml`), chosen by extension.
//! Every load and save validates the table, so a file on disk that passes
//! through here is always usable by the input layer.

use core::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use scrubmarine_errors::ConfigError;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::bindings::GamepadBindings;

/// On-disk format of a bindings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingsFormat {
    Json,
    Yaml,
}

impl BindingsFormat {
    /// Detect the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(BindingsFormat::Json),
            "yaml" | "yml" => Ok(BindingsFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(extension)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BindingsFormat::Json => "json",
            BindingsFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for BindingsFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse and validate a bindings table.
pub fn parse_bindings(text: &str, format: BindingsFormat) -> Result<GamepadBindings, ConfigError> {
    let bindings: GamepadBindings = match format {
        BindingsFormat::Json => serde_json::from_str(text)
            .map_err(|e| ConfigError::parse(format.as_str(), e.to_string()))?,
        BindingsFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| ConfigError::parse(format.as_str(), e.to_string()))?,
    };
    bindings.validate()?;
    Ok(bindings)
}

/// Render a bindings table in `format`.
pub fn render_bindings(
    bindings: &GamepadBindings,
    format: BindingsFormat,
) -> Result<String, ConfigError> {
    match format {
        BindingsFormat::Json => serde_json::to_string_pretty(bindings)
            .map_err(|e| ConfigError::serialize(format.as_str(), e.to_string())),
        BindingsFormat::Yaml => serde_yaml::to_string(bindings)
            .map_err(|e| ConfigError::serialize(format.as_str(), e.to_string())),
    }
}

/// Read, parse and validate the bindings file at `path`.
pub fn load_bindings(path: &Path) -> Result<GamepadBindings, ConfigError> {
    let format = BindingsFormat::from_path(path)?;
    debug!(path = ?path, format = %format, "Loading gamepad bindings");

    let text = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    let bindings = parse_bindings(&text, format)?;

    info!(
        path = ?path,
        deadzone = bindings.deadzone,
        sensitivity = bindings.sensitivity,
        "Gamepad bindings loaded"
    );
    Ok(bindings)
}

/// Like [`load_bindings`], but a missing file yields [`crate::DEFAULT_GAMEPAD_BINDINGS`].
///
/// Any other failure (unreadable, malformed, invalid) is still returned.
pub fn load_bindings_or_default(path: &Path) -> Result<GamepadBindings, ConfigError> {
    match load_bindings(path) {
        Ok(bindings) => Ok(bindings),
        Err(e) if e.is_not_found() => {
            info!(path = ?path, "Bindings file not found, using default layout");
            Ok(GamepadBindings::default())
        }
        Err(e) => {
            warn!(path = ?path, error = %e, "Failed to load gamepad bindings");
            Err(e)
        }
    }
}

/// Validate and write `bindings` to `path`.
///
/// The table is written to a uniquely named temp file in the same directory
/// and persisted over `path`. A failed save leaves the previous file and any
/// neighbouring files untouched, and removes the temp file.
pub fn save_bindings(path: &Path, bindings: &GamepadBindings) -> Result<(), ConfigError> {
    let format = BindingsFormat::from_path(path)?;
    bindings.validate()?;
    let text = render_bindings(bindings, format)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
    debug!(path = ?path, temp = ?temp.path(), "Writing gamepad bindings");

    if let Err(e) = temp
        .write_all(text.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
    {
        return Err(ConfigError::io(temp.path(), e));
    }
    // Dropping a failed persist removes the temp file.
    temp.persist(path).map_err(|e| ConfigError::io(path, e.error))?;

    info!(path = ?path, format = %format, "Gamepad bindings saved");
    Ok(())
}
