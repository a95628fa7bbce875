/* src/site/src/content.rs */

// Read-only site content, loaded once at start-up from `content.json`.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

/// A string per locale. Missing locales fall back to the default locale.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Localized(HashMap<String, String>);

impl Localized {
  pub fn get<'a>(&'a self, locale: &str, default_locale: &str) -> &'a str {
    self
      .0
      .get(locale)
      .or_else(|| self.0.get(default_locale))
      .map(String::as_str)
      .unwrap_or_default()
  }

  pub fn locales(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryItem {
  pub id: String,
  pub image: String,
  #[serde(default)]
  pub caption: Localized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
  pub id: String,
  /// Tab the publication is listed under: `news`, `photo` or `video`.
  pub kind: String,
  pub date: String,
  pub title: Localized,
  #[serde(default)]
  pub summary: Localized,
  #[serde(default)]
  pub body: Localized,
  #[serde(default)]
  pub image: Option<String>,
  #[serde(default)]
  pub video_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuItem {
  pub id: String,
  pub href: String,
  pub label: Localized,
  #[serde(default)]
  pub children: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainDetails {
  #[serde(default)]
  pub company: Localized,
  #[serde(default)]
  pub address: Localized,
  #[serde(default)]
  pub phone: String,
  #[serde(default)]
  pub email: String,
  #[serde(default)]
  pub working_hours: Localized,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentStore {
  /// Locale used when an entry lacks the requested translation.
  #[serde(skip)]
  pub default_locale: String,
  #[serde(default)]
  pub gallery: Vec<GalleryItem>,
  #[serde(default)]
  pub publications: Vec<Publication>,
  #[serde(default)]
  pub menus: Vec<MenuItem>,
  #[serde(default)]
  pub details: MainDetails,
}

impl ContentStore {
  pub fn load(path: &Path, default_locale: &str) -> Result<Self> {
    let raw =
      std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let store =
      Self::from_json(&raw, default_locale).with_context(|| format!("invalid {}", path.display()))?;
    tracing::info!(
      path = %path.display(),
      gallery = store.gallery.len(),
      publications = store.publications.len(),
      menus = store.menus.len(),
      "content loaded"
    );
    Ok(store)
  }

  pub fn from_json(raw: &str, default_locale: &str) -> Result<Self> {
    let mut store: Self = serde_json::from_str(raw)?;
    store.default_locale = default_locale.to_string();
    store.check_unique_ids()?;
    Ok(store)
  }

  fn check_unique_ids(&self) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for p in &self.publications {
      if !seen.insert(p.id.as_str()) {
        bail!("duplicate publication id \"{}\"", p.id);
      }
    }
    Ok(())
  }

  /// `text` in `locale`, falling back to the default locale.
  pub fn text<'a>(&self, text: &'a Localized, locale: &str) -> &'a str {
    text.get(locale, &self.default_locale)
  }

  pub fn publication(&self, id: &str) -> Option<&Publication> {
    self.publications.iter().find(|p| p.id == id)
  }

  /// Publications listed under `kind`, newest first.
  pub fn publications_of(&self, kind: &str) -> Vec<&Publication> {
    let mut items: Vec<&Publication> = self.publications.iter().filter(|p| p.kind == kind).collect();
    items.sort_by(|a, b| b.date.cmp(&a.date));
    items
  }
}
