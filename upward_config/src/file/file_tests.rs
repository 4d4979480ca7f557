//! Tests for the stock loader.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use rstest::rstest;
use serde::Deserialize;
use tempfile::TempDir;

use super::{FileError, load_workspace_file};

#[derive(Debug, Deserialize)]
struct Sample {
    is_enabled: bool,
}

#[rstest]
#[case("workspace.toml", "is_enabled = true\n")]
#[case("workspace.json", "{\"is_enabled\": true}\n")]
fn parses_supported_formats(#[case] name: &str, #[case] contents: &str) -> Result<()> {
    let dir = TempDir::new().context("create tempdir")?;
    let path = dir.path().join(name);
    std::fs::write(&path, contents).context("write config")?;

    let figment = load_workspace_file(&path)
        .with_context(|| format!("load {name}"))?;
    let sample: Sample = figment.extract().context("extract sample")?;
    ensure!(sample.is_enabled, "expected is_enabled=true from {name}");
    Ok(())
}

#[test]
fn unknown_extensions_parse_as_toml() -> Result<()> {
    let dir = TempDir::new().context("create tempdir")?;
    let path = dir.path().join(".workspacerc");
    std::fs::write(&path, "is_enabled = false\n").context("write config")?;

    let figment = load_workspace_file(&path).context("load dotfile")?;
    let sample: Sample = figment.extract().context("extract sample")?;
    ensure!(!sample.is_enabled, "expected is_enabled=false");
    Ok(())
}

#[test]
fn malformed_toml_is_a_parse_error() -> Result<()> {
    let dir = TempDir::new().context("create tempdir")?;
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "is_enabled = ???\n").context("write config")?;

    match load_workspace_file(&path) {
        Err(FileError::Toml(_)) => Ok(()),
        Err(other) => anyhow::bail!("expected FileError::Toml, got {other:?}"),
        Ok(_) => anyhow::bail!("expected malformed TOML to fail"),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    match load_workspace_file(Path::new("/nonexistent/workspace.toml")) {
        Err(FileError::Read(err)) => {
            assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected FileError::Read, got {other:?}"),
    }
}
