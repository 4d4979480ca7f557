//! Primary error enum for resolution flows.

use thiserror::Error;

/// Errors that can occur while resolving or loading a configuration file.
///
/// A search that finds nothing is not an error; it is the `Ok(None)` outcome
/// of the resolver operations. Only malformed input paths and loader
/// failures surface here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// The supplied search path could not be used.
    #[error("invalid search path '{}': {reason}", path.display())]
    InvalidInput {
        /// Path that failed validation.
        path: std::path::PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// The injected loader failed for a resolved configuration file.
    #[error("failed to load configuration file '{}': {source}", path.display())]
    Loader {
        /// Resolved path handed to the loader.
        path: std::path::PathBuf,
        /// Error reported by the loader, preserved unchanged.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
