//! Error constructors shared by resolver and loader code.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use super::ResolveError;

/// Construct a [`ResolveError::InvalidInput`] for a search path.
pub(crate) fn invalid_input(path: &Path, reason: impl Into<String>) -> Arc<ResolveError> {
    Arc::new(ResolveError::InvalidInput {
        path: path.to_path_buf(),
        reason: reason.into(),
    })
}

/// Construct a [`ResolveError::Loader`] preserving the loader's own error.
pub(crate) fn loader_error(
    path: &Path,
    err: impl Into<Box<dyn Error + Send + Sync>>,
) -> Arc<ResolveError> {
    Arc::new(ResolveError::Loader {
        path: path.to_path_buf(),
        source: err.into(),
    })
}
