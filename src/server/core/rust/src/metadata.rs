/* src/server/core/rust/src/metadata.rs */

use serde::Serialize;

use crate::i18n::Translator;

pub const TITLE_SEPARATOR: &str = " | ";

/// Title and description attached to a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
  pub title: String,
  pub description: String,
}

impl PageMetadata {
  /// `"{section} | {page}"` title, e.g. "Admin Panel | Menus".
  pub fn section(t: &Translator, section_key: &str, page_key: &str, description_key: &str) -> Self {
    Self {
      title: format!("{}{TITLE_SEPARATOR}{}", t.t(section_key), t.t(page_key)),
      description: t.t(description_key),
    }
  }

  pub fn single(t: &Translator, title_key: &str, description_key: &str) -> Self {
    Self { title: t.t(title_key), description: t.t(description_key) }
  }
}
