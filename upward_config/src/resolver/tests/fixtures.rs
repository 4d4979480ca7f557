//! Shared fixtures and doubles for resolver tests.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rstest::fixture;
use tempfile::TempDir;

use crate::probe::FileProbe;

/// Candidate names used throughout these tests. Distinctive enough that a
/// walk escaping the temp tree cannot match stray files on the host.
pub(super) const FIRST_NAME: &str = "x.upward-test.toml";
pub(super) const SECOND_NAME: &str = "y.upward-test.toml";

/// Directory tree `<root>/a/b/c` with no configuration files.
#[fixture]
pub(super) fn nested_tree() -> Result<(TempDir, PathBuf)> {
    let root = TempDir::new().context("create temp root")?;
    let leaf = root.path().join("a").join("b").join("c");
    std::fs::create_dir_all(&leaf).context("create nested directories")?;
    Ok((root, leaf))
}

pub(super) fn touch(path: &Path) -> Result<()> {
    std::fs::write(path, b"loaded = true\n")
        .with_context(|| format!("write {}", path.display()))
}

/// Probe double answering from a fixed file set.
///
/// Directories marked unreadable fail every existence check beneath them,
/// simulating a permission error at that level of the walk.
pub(super) struct StaticProbe {
    files: HashSet<PathBuf>,
    unreadable: HashSet<PathBuf>,
}

impl StaticProbe {
    pub(super) fn new<I>(files: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            unreadable: HashSet::new(),
        }
    }

    pub(super) fn with_unreadable(mut self, dir: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(dir.into());
        self
    }
}

impl FileProbe for StaticProbe {
    fn is_file(&self, path: &Path) -> io::Result<bool> {
        if path
            .parent()
            .is_some_and(|dir| self.unreadable.contains(dir))
        {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "directory is not listable",
            ));
        }
        Ok(self.files.contains(path))
    }
}
