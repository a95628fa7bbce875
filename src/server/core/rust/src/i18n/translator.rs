/* src/server/core/rust/src/i18n/translator.rs */

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

/// Message lookup for one request's locale. Holds no mutable state, so
/// concurrent requests each carry their own locale.
#[derive(Debug, Clone)]
pub struct Translator {
  locale: String,
  default_locale: String,
  messages: Arc<HashMap<String, Value>>,
}

impl Translator {
  pub fn new(
    locale: impl Into<String>,
    default_locale: impl Into<String>,
    messages: Arc<HashMap<String, Value>>,
  ) -> Self {
    Self { locale: locale.into(), default_locale: default_locale.into(), messages }
  }

  pub fn locale(&self) -> &str {
    &self.locale
  }

  /// Look up a dotted key (`Admin.Menus.title`).
  /// Order: active locale, default locale, then the key itself.
  pub fn t(&self, key: &str) -> String {
    self
      .lookup(&self.locale, key)
      .or_else(|| self.lookup(&self.default_locale, key))
      .unwrap_or_else(|| {
        tracing::debug!(locale = %self.locale, key, "missing translation");
        key.to_string()
      })
  }

  /// Translate and substitute `{name}` placeholders.
  pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(self.t(key), |text, (name, value)| text.replace(&format!("{{{name}}}"), value))
  }

  /// Whole message subtree under `key` for the active locale (e.g. for
  /// template data), or an empty object.
  pub fn namespace(&self, key: &str) -> Value {
    self
      .node(&self.locale, key)
      .or_else(|| self.node(&self.default_locale, key))
      .cloned()
      .unwrap_or_else(|| Value::Object(serde_json::Map::new()))
  }

  fn node(&self, locale: &str, key: &str) -> Option<&Value> {
    let catalog = self.messages.get(locale)?;
    key.split('.').try_fold(catalog, |node, part| node.get(part))
  }

  fn lookup(&self, locale: &str, key: &str) -> Option<String> {
    self.node(locale, key).and_then(Value::as_str).map(str::to_string)
  }
}
