//! Nearest-ancestor configuration file resolution.
//!
//! [`ConfigResolver`] walks from a starting directory toward the filesystem
//! root looking for one of an ordered set of candidate file names, loads the
//! first match through a caller-supplied loader, and caches the parsed value
//! keyed by resolved path so repeated lookups cost no I/O.
//!
//! "Not found" is a normal outcome, surfaced as `Ok(None)`; only malformed
//! input paths and loader failures are reported as [`ResolveError`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use upward_config::{ConfigResolver, load_workspace_file};
//!
//! # fn run() -> upward_config::ResolveResult<()> {
//! let resolver: ConfigResolver<figment::Figment> = ConfigResolver::builder()
//!     .candidate(".workspace.toml")
//!     .candidate("workspace.toml")
//!     .build();
//!
//! #[derive(serde::Deserialize)]
//! struct Workspace { default_target: String }
//!
//! if let Some(config) = resolver.resolve_and_load(Path::new("."), load_workspace_file)? {
//!     if let Ok(workspace) = config.extract::<Workspace>() {
//!         println!("default target is {}", workspace.default_target);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod error;
pub mod file;
mod path;
mod probe;
pub mod resolver;

pub use error::{ResolveError, ResolveResult};
pub use file::{FileError, load_workspace_file};
pub use probe::{FileProbe, OsFileProbe};
pub use resolver::{ConfigResolver, ConfigResolverBuilder};
