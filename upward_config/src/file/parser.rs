//! Format-specific parsing for the stock loader.

use std::path::Path;

use figment::{
    Figment,
    providers::{Format, Json, Toml},
};

use super::FileError;

/// Parse configuration data according to the file extension.
///
/// Data is pre-validated with the format's own parser so failures are
/// reported before figment performs its own parse pass.
pub(super) fn parse_by_format(path: &Path, data: &str) -> Result<Figment, FileError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json") => {
            serde_json::from_str::<serde_json::Value>(data)?;
            Figment::from(Json::string(data))
        }
        _ => {
            toml::from_str::<toml::Value>(data).map_err(Box::new)?;
            Figment::from(Toml::string(data))
        }
    };
    Ok(figment)
}
