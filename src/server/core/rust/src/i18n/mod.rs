/* src/server/core/rust/src/i18n/mod.rs */

// Locale catalogs, request locale resolution and per-request translation.

mod loader;
mod resolve;
mod translator;

use std::collections::HashMap;
use std::sync::Arc;

pub use loader::load_i18n_config;
pub use resolve::{
  ResolveData, ResolveStrategy, default_strategies, from_accept_language, from_cookie,
  from_url_prefix, resolve_chain,
};
pub use translator::Translator;

/// Runtime i18n configuration. Catalogs are immutable after load and shared
/// read-only by every request.
#[derive(Debug, Clone)]
pub struct I18nConfig {
  pub locales: Vec<String>,
  pub default: String,
  /// Locale -> nested message catalog
  pub messages: Arc<HashMap<String, serde_json::Value>>,
}

impl I18nConfig {
  pub fn new(
    locales: Vec<String>,
    default: impl Into<String>,
    messages: HashMap<String, serde_json::Value>,
  ) -> Self {
    Self { locales, default: default.into(), messages: Arc::new(messages) }
  }

  pub fn is_supported(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }

  /// Translator bound to `locale`, falling back to the default catalog.
  pub fn translator(&self, locale: &str) -> Translator {
    Translator::new(locale, &self.default, self.messages.clone())
  }
}
