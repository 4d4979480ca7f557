//! Stock workspace-file loader.
//!
//! Applications without custom format needs hand [`load_workspace_file`] to
//! [`ConfigResolver::resolve_and_load`](crate::ConfigResolver::resolve_and_load);
//! it reads the file and parses it by extension into a [`figment::Figment`]
//! from which any `serde::Deserialize` type can be extracted.

mod parser;

use std::path::Path;

use figment::Figment;
use thiserror::Error;

use parser::parse_by_format;

/// Errors produced by the stock loader.
///
/// The resolver wraps these in
/// [`ResolveError::Loader`](crate::ResolveError::Loader) together with the
/// offending path, so no path is carried here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FileError {
    /// Reading the file failed.
    #[error(transparent)]
    Read(#[from] std::io::Error),

    /// The contents are not valid TOML.
    #[error(transparent)]
    Toml(#[from] Box<toml::de::Error>),

    /// The contents are not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Load a configuration file, selecting the parser from the extension.
///
/// `.json` files use the JSON provider; everything else is treated as TOML.
///
/// # Errors
///
/// Returns a [`FileError`] when the file cannot be read or parsed.
pub fn load_workspace_file(path: &Path) -> Result<Figment, FileError> {
    let data = std::fs::read_to_string(path)?;
    parse_by_format(path, &data)
}

#[cfg(test)]
mod file_tests;
