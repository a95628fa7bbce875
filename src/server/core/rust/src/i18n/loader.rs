/* src/server/core/rust/src/i18n/loader.rs */

use std::collections::HashMap;
use std::path::Path;

use super::I18nConfig;
use crate::errors::SiteError;

/// Load `{dir}/{locale}.json` for every locale.
/// The default locale's catalog must exist; other locales may be missing and
/// then resolve every key through the default catalog.
pub fn load_i18n_config(
  dir: &Path,
  locales: &[String],
  default: &str,
) -> Result<I18nConfig, SiteError> {
  if !locales.iter().any(|l| l == default) {
    return Err(SiteError::validation(format!(
      "default locale \"{default}\" is not in {locales:?}"
    )));
  }

  let mut messages = HashMap::new();
  for locale in locales {
    let path = dir.join(format!("{locale}.json"));
    let content = match std::fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if locale != default => {
        tracing::warn!(path = %path.display(), error = %e, "locale catalog missing");
        continue;
      }
      Err(e) => {
        return Err(SiteError::internal(format!("failed to read {}: {e}", path.display())));
      }
    };
    let parsed: serde_json::Value = serde_json::from_str(&content)
      .map_err(|e| SiteError::internal(format!("failed to parse {}: {e}", path.display())))?;
    if !parsed.is_object() {
      return Err(SiteError::validation(format!("{} must be a JSON object", path.display())));
    }
    messages.insert(locale.clone(), parsed);
  }

  tracing::debug!(locales = messages.len(), "message catalogs loaded");
  Ok(I18nConfig::new(locales.to_vec(), default, messages))
}
