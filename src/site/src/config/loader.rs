/* src/site/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::SiteConfig;

pub const CONFIG_FILE: &str = "site.toml";

/// Walk upward from `start` to find `site.toml`, like Cargo.toml discovery
pub fn find_site_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_site_config(path: &Path) -> Result<SiteConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let mut config: SiteConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
  config.validate().with_context(|| format!("invalid {}", path.display()))?;
  Ok(config)
}

/// Apply environment overrides (`PORT`). `var` is `std::env::var` outside tests.
pub fn apply_env_overrides(
  config: &mut SiteConfig,
  var: impl Fn(&str) -> Option<String>,
) -> Result<()> {
  if let Some(port) = var("PORT") {
    config.server.port =
      port.trim().parse().with_context(|| format!("PORT must be a port number, got \"{port}\""))?;
  }
  Ok(())
}
