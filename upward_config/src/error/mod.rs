//! Error types produced by the resolver.

mod constructors;
mod types;

pub use types::ResolveError;

/// Result alias used throughout the crate.
///
/// Errors are shared behind an [`Arc`](std::sync::Arc) so concurrent callers
/// waiting on one cache slot can observe the same failure without cloning it.
pub type ResolveResult<T> = Result<T, std::sync::Arc<ResolveError>>;

pub(crate) use constructors::{invalid_input, loader_error};
