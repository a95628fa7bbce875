/* src/site/src/config/types.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use regex::Regex;
use saminvest_server::{ChatWidget, ImagePolicy, ToastProvider};
use serde::Deserialize;

/// Locale tags accepted in `[i18n]`: `uz`, `ru`, `en-US`.
const LOCALE_TAG: &str = r"^[a-z]{2}(-[A-Z]{2})?$";

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
  #[serde(default)]
  pub server: ServerSection,
  pub i18n: I18nSection,
  #[serde(default)]
  pub content: ContentSection,
  #[serde(default)]
  pub toast: ToastSection,
  #[serde(default)]
  pub chat: Option<ChatWidget>,
  #[serde(default)]
  pub images: ImagePolicy,
  /// Directory of the config file; relative paths resolve against it.
  #[serde(skip)]
  pub base_dir: PathBuf,
}

impl SiteConfig {
  pub fn resolve(&self, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { self.base_dir.join(path) }
  }

  pub fn validate(&self) -> Result<()> {
    self.i18n.validate()?;
    if self.toast.auto_close_ms == 0 {
      bail!("toast.auto_close_ms must be greater than zero");
    }
    if let Some(chat) = &self.chat {
      if chat.widget_id.trim().is_empty() {
        bail!("chat.widget_id must not be empty");
      }
      if !chat.script_url.starts_with("https://") {
        bail!("chat.script_url must be an https URL, got \"{}\"", chat.script_url);
      }
    }
    Ok(())
  }

  pub fn listen_addr(&self) -> String {
    format!("{}:{}", self.server.host, self.server.port)
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
  #[serde(default = "default_host")]
  pub host: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_static_dir")]
  pub static_dir: PathBuf,
}

impl Default for ServerSection {
  fn default() -> Self {
    Self { host: default_host(), port: default_port(), static_dir: default_static_dir() }
  }
}

fn default_host() -> String {
  "0.0.0.0".to_string()
}

fn default_port() -> u16 {
  3000
}

fn default_static_dir() -> PathBuf {
  PathBuf::from("static")
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  pub locales: Vec<String>,
  #[serde(default = "default_i18n_default")]
  pub default: String,
  #[serde(default = "default_messages_dir")]
  pub messages_dir: PathBuf,
}

impl I18nSection {
  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if !self.locales.contains(&self.default) {
      bail!("i18n.default \"{}\" is not in i18n.locales {:?}", self.default, self.locales);
    }
    let tag = Regex::new(LOCALE_TAG).context("invalid locale tag pattern")?;
    if let Some(bad) = self.locales.iter().find(|l| !tag.is_match(l)) {
      bail!("i18n.locales entry \"{bad}\" is not a locale tag like \"uz\" or \"en-US\"");
    }
    let mut seen = std::collections::HashSet::new();
    if let Some(dup) = self.locales.iter().find(|l| !seen.insert(l.as_str())) {
      bail!("i18n.locales lists \"{dup}\" more than once");
    }
    Ok(())
  }
}

fn default_i18n_default() -> String {
  "uz".to_string()
}

fn default_messages_dir() -> PathBuf {
  PathBuf::from("locales")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentSection {
  #[serde(default = "default_content_path")]
  pub path: PathBuf,
  #[serde(default = "default_templates_dir")]
  pub templates_dir: PathBuf,
}

impl Default for ContentSection {
  fn default() -> Self {
    Self { path: default_content_path(), templates_dir: default_templates_dir() }
  }
}

fn default_content_path() -> PathBuf {
  PathBuf::from("content.json")
}

fn default_templates_dir() -> PathBuf {
  PathBuf::from("templates")
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToastSection {
  #[serde(default = "default_auto_close_ms")]
  pub auto_close_ms: u64,
  #[serde(default = "default_position")]
  pub position: String,
}

impl Default for ToastSection {
  fn default() -> Self {
    Self { auto_close_ms: default_auto_close_ms(), position: default_position() }
  }
}

impl From<&ToastSection> for ToastProvider {
  fn from(section: &ToastSection) -> Self {
    Self { auto_close_ms: section.auto_close_ms, position: section.position.clone() }
  }
}

fn default_auto_close_ms() -> u64 {
  saminvest_server::notify::DEFAULT_AUTO_CLOSE_MS
}

fn default_position() -> String {
  ToastProvider::default().position
}
