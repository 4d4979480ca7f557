//! Global (home-directory) lookup tests.
//!
//! These mutate `HOME`, so they hold the env guard and run serially.

use anyhow::{Context, Result, anyhow, ensure};
use serde::Deserialize;
use serial_test::serial;
use tempfile::TempDir;
use test_helpers::env;

use upward_config::{ConfigResolver, load_workspace_file};

#[derive(Debug, Deserialize)]
struct Workspace {
    default_target: String,
}

#[test]
#[serial]
fn global_dir_honours_home() -> Result<()> {
    let home = TempDir::new().context("create temp home")?;
    let _guard = env::set_var("HOME", home.path());

    let dir = ConfigResolver::<()>::global_dir()
        .ok_or_else(|| anyhow!("expected a global directory"))?;
    ensure!(dir == home.path(), "expected HOME to win, got {}", dir.display());
    Ok(())
}

#[test]
#[serial]
fn global_lookup_finds_and_loads_the_home_file() -> Result<()> {
    let home = TempDir::new().context("create temp home")?;
    std::fs::write(
        home.path().join(".workspace.toml"),
        "default_target = \"e2e\"\n",
    )
    .context("write global workspace")?;
    let _guard = env::set_var("HOME", home.path());

    let resolver: ConfigResolver<figment::Figment> = ConfigResolver::builder()
        .candidate(".workspace.toml")
        .candidate("workspace.toml")
        .build();

    let found = resolver
        .find_global()
        .map_err(|err| anyhow!("global lookup failed: {err}"))?
        .ok_or_else(|| anyhow!("expected a global workspace file"))?;
    ensure!(
        found == home.path().join(".workspace.toml"),
        "unexpected global match {}",
        found.display(),
    );

    let config = resolver
        .load_global(load_workspace_file)
        .map_err(|err| anyhow!("global load failed: {err}"))?
        .ok_or_else(|| anyhow!("expected the global workspace to load"))?;
    let workspace: Workspace = config.extract().context("extract workspace")?;
    ensure!(workspace.default_target == "e2e", "unexpected target");
    Ok(())
}

#[test]
#[serial]
fn missing_global_candidates_are_not_an_error() -> Result<()> {
    let home = TempDir::new().context("create temp home")?;
    let _guard = env::set_var("HOME", home.path());

    let resolver: ConfigResolver<()> = ConfigResolver::builder()
        .candidate(".workspace.toml")
        .build();
    let found = resolver
        .find_global()
        .map_err(|err| anyhow!("global lookup failed: {err}"))?;
    ensure!(found.is_none(), "expected NotFound, got {found:?}");
    Ok(())
}
