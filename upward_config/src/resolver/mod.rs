//! Upward configuration file resolution with cached loading.
//!
//! [`ConfigResolver`] owns an ordered candidate name set, an existence probe
//! and a per-instance cache. Searches prefer the nearest directory; candidate
//! order is only the tie-break within one directory. A search that reaches
//! the filesystem root without a match returns `Ok(None)`.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use camino::Utf8PathBuf;

use crate::ResolveResult;
use crate::cache::ConfigCache;
use crate::error::loader_error;
use crate::path::{absolutise, to_utf8};
use crate::probe::FileProbe;

mod builder;

pub use builder::ConfigResolverBuilder;

/// Resolves the nearest enclosing configuration file for a directory.
///
/// The type parameter `C` is the loader-defined parsed representation; the
/// resolver never inspects it. Loaded values are shared as `Arc<C>` and kept
/// for the resolver's lifetime.
pub struct ConfigResolver<C> {
    candidate_names: Vec<String>,
    probe: Arc<dyn FileProbe>,
    cache: ConfigCache<C>,
}

impl<C> ConfigResolver<C> {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> ConfigResolverBuilder<C> {
        ConfigResolverBuilder::new()
    }

    /// Returns the candidate file names in the order they are tried.
    #[must_use]
    pub fn candidate_names(&self) -> &[String] {
        &self.candidate_names
    }

    /// Finds the nearest candidate file from `start_dir` up to the root.
    ///
    /// `start_dir` must be syntactically valid but need not exist. Each
    /// directory from `start_dir` to the root inclusive is checked for the
    /// candidate names in order; the first match wins. Unreadable levels are
    /// treated as empty and the walk continues.
    ///
    /// No file contents are read; only existence is probed.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidInput`](crate::ResolveError::InvalidInput)
    /// when `start_dir` is empty or cannot be made absolute. A search that
    /// finds nothing is `Ok(None)`, not an error.
    pub fn find_upward(&self, start_dir: &Path) -> ResolveResult<Option<PathBuf>> {
        let start = absolutise(start_dir)?;
        let mut dir = start.as_path();
        loop {
            if let Some(found) = self.match_in(dir) {
                return Ok(Some(found));
            }
            match dir.parent() {
                Some(parent) => dir = parent,
                None => return Ok(None),
            }
        }
    }

    /// UTF-8 projection of [`find_upward`](Self::find_upward).
    ///
    /// A match whose path cannot be represented as UTF-8 is reported as
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// As [`find_upward`](Self::find_upward).
    pub fn find_upward_utf8(&self, start_dir: &Path) -> ResolveResult<Option<Utf8PathBuf>> {
        Ok(self.find_upward(start_dir)?.and_then(to_utf8))
    }

    /// Checks the candidate names directly inside `base_dir` only.
    ///
    /// First match wins by name order; no upward walk is attempted even when
    /// an ancestor holds an earlier-named candidate.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidInput`](crate::ResolveError::InvalidInput)
    /// when `base_dir` is empty or cannot be made absolute.
    pub fn resolve_fixed(&self, base_dir: &Path) -> ResolveResult<Option<PathBuf>> {
        let base = absolutise(base_dir)?;
        Ok(self.match_in(&base))
    }

    /// Resolves upward from `start_dir` and loads the match through `loader`.
    ///
    /// On a cache hit the loader is not invoked and no file contents are
    /// read. On a miss the loader runs exactly once for the resolved path,
    /// even across
    /// repeated calls with different `start_dir` values that resolve to the
    /// same file, and even across concurrent callers.
    ///
    /// # Errors
    ///
    /// Loader failures are wrapped in
    /// [`ResolveError::Loader`](crate::ResolveError::Loader) with the source
    /// preserved; they are never cached, so a later call retries the loader.
    pub fn resolve_and_load<F, E>(
        &self,
        start_dir: &Path,
        loader: F,
    ) -> ResolveResult<Option<Arc<C>>>
    where
        F: FnOnce(&Path) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        match self.find_upward(start_dir)? {
            Some(path) => self.load_cached(&path, loader).map(Some),
            None => Ok(None),
        }
    }

    /// Fixed-directory counterpart of
    /// [`resolve_and_load`](Self::resolve_and_load).
    ///
    /// Shares the same cache, so a file already loaded through the upward
    /// search is returned without invoking `loader` again.
    ///
    /// # Errors
    ///
    /// As [`resolve_and_load`](Self::resolve_and_load).
    pub fn load_fixed<F, E>(&self, base_dir: &Path, loader: F) -> ResolveResult<Option<Arc<C>>>
    where
        F: FnOnce(&Path) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        match self.resolve_fixed(base_dir)? {
            Some(path) => self.load_cached(&path, loader).map(Some),
            None => Ok(None),
        }
    }

    /// Returns the global configuration directory, the user's home.
    ///
    /// Honours `HOME` (and `USERPROFILE` on Windows) before falling back to
    /// the platform lookup.
    #[must_use]
    pub fn global_dir() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
    }

    /// Locates a candidate in the global directory without loading it.
    ///
    /// A missing home directory is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// As [`resolve_fixed`](Self::resolve_fixed).
    pub fn find_global(&self) -> ResolveResult<Option<PathBuf>> {
        match Self::global_dir() {
            Some(home) => self.resolve_fixed(&home),
            None => Ok(None),
        }
    }

    /// Loads the global configuration file through `loader`, cached.
    ///
    /// # Errors
    ///
    /// As [`resolve_and_load`](Self::resolve_and_load).
    pub fn load_global<F, E>(&self, loader: F) -> ResolveResult<Option<Arc<C>>>
    where
        F: FnOnce(&Path) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        match Self::global_dir() {
            Some(home) => self.load_fixed(&home, loader),
            None => Ok(None),
        }
    }

    fn match_in(&self, dir: &Path) -> Option<PathBuf> {
        for name in &self.candidate_names {
            let candidate = dir.join(name);
            match self.probe.is_file(&candidate) {
                Ok(true) => return Some(candidate),
                Ok(false) => {}
                Err(err) => {
                    tracing::debug!(
                        candidate = %candidate.display(),
                        error = %err,
                        "treating unreadable candidate as absent"
                    );
                }
            }
        }
        None
    }

    fn load_cached<F, E>(&self, path: &Path, loader: F) -> ResolveResult<Arc<C>>
    where
        F: FnOnce(&Path) -> Result<C, E>,
        E: Into<Box<dyn Error + Send + Sync>>,
    {
        self.cache
            .get_or_load(path, |p| loader(p).map_err(|err| loader_error(p, err)))
    }
}

impl<C> fmt::Debug for ConfigResolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("candidate_names", &self.candidate_names)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
