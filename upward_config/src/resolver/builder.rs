//! Builder for the configuration resolver.

use std::marker::PhantomData;
use std::sync::Arc;

use super::ConfigResolver;
use crate::cache::ConfigCache;
use crate::probe::{FileProbe, OsFileProbe};

/// Builder for [`ConfigResolver`].
///
/// Candidate names are tried in insertion order at every directory level.
/// An empty candidate set is permitted; searches then trivially find
/// nothing.
///
/// # Examples
///
/// ```rust
/// use upward_config::ConfigResolver;
///
/// let resolver: ConfigResolver<figment::Figment> = ConfigResolver::builder()
///     .candidate(".workspace.toml")
///     .candidate("workspace.toml")
///     .build();
/// assert_eq!(resolver.candidate_names().len(), 2);
/// ```
pub struct ConfigResolverBuilder<C> {
    candidate_names: Vec<String>,
    probe: Option<Arc<dyn FileProbe>>,
    marker: PhantomData<fn() -> C>,
}

impl<C> ConfigResolverBuilder<C> {
    pub(super) fn new() -> Self {
        Self {
            candidate_names: Vec::new(),
            probe: None,
            marker: PhantomData,
        }
    }

    /// Appends a candidate file name tried at every directory level.
    #[must_use]
    pub fn candidate(mut self, name: impl Into<String>) -> Self {
        self.candidate_names.push(name.into());
        self
    }

    /// Replaces the candidate name set.
    #[must_use]
    pub fn candidates<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.candidate_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Overrides the existence probe consulted during searches.
    ///
    /// The default probe is backed by [`std::fs`]; tests inject in-memory
    /// probes here.
    #[must_use]
    pub fn probe(mut self, probe: Arc<dyn FileProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Finalises the builder and returns a [`ConfigResolver`] with an empty
    /// cache.
    #[must_use]
    pub fn build(self) -> ConfigResolver<C> {
        ConfigResolver {
            candidate_names: self.candidate_names,
            probe: self.probe.unwrap_or_else(|| Arc::new(OsFileProbe)),
            cache: ConfigCache::default(),
        }
    }
}

impl<C> Default for ConfigResolverBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
