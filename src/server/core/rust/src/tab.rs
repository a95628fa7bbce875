/* src/server/core/rust/src/tab.rs */

use crate::cookie::CookieStore;

/// Last-selected tab of the admin publication (media) pages.
pub const ADMIN_PUBLICATION_TAB: &str = "admin-publication-tab";
/// Last-selected tab of the public publication pages.
pub const PUBLICATION_TAB: &str = "publication-tab";

/// Raw tab cookie value, exactly as the browser sent it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabHint(String);

impl TabHint {
  pub fn new(raw: impl Into<String>) -> Self {
    Self(raw.into())
  }

  pub fn raw(&self) -> &str {
    &self.0
  }
}

/// Read the tab hint stored under `cookie_name`; `None` when the cookie is absent.
pub fn read_tab(cookies: &CookieStore, cookie_name: &str) -> Option<TabHint> {
  cookies.get(cookie_name).map(TabHint::new)
}

/// The fixed set of tabs a view understands, with the one shown by default.
#[derive(Debug, Clone, Copy)]
pub struct TabSet {
  names: &'static [&'static str],
  default: &'static str,
}

impl TabSet {
  /// `default` must be one of `names`.
  pub const fn new(names: &'static [&'static str], default: &'static str) -> Self {
    Self { names, default }
  }

  pub fn names(&self) -> &'static [&'static str] {
    self.names
  }

  pub fn default_tab(&self) -> &'static str {
    self.default
  }

  pub fn contains(&self, name: &str) -> bool {
    self.names.contains(&name)
  }

  /// The tab to show for a hint: the hinted tab when it is a member, else the default.
  pub fn select(&self, hint: Option<&TabHint>) -> &'static str {
    hint
      .and_then(|h| self.names.iter().copied().find(|name| *name == h.raw()))
      .unwrap_or(self.default)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TABS: TabSet = TabSet::new(&["news", "photo", "video"], "news");

  #[test]
  fn absent_cookie_is_none() {
    let cookies = CookieStore::from_header(Some("other=1"));
    assert_eq!(read_tab(&cookies, PUBLICATION_TAB), None);
  }

  #[test]
  fn hint_is_verbatim() {
    for raw in ["", "Photo", " video ", "<script>"] {
      let header = format!("{ADMIN_PUBLICATION_TAB}={raw}");
      let cookies = CookieStore::from_header(Some(&header));
      let hint = read_tab(&cookies, ADMIN_PUBLICATION_TAB);
      assert_eq!(hint.as_ref().map(TabHint::raw), Some(raw));
    }
  }

  #[test]
  fn select_known_tab() {
    assert_eq!(TABS.select(Some(&TabHint::new("video"))), "video");
  }

  #[test]
  fn select_falls_back_to_default() {
    assert_eq!(TABS.select(None), "news");
    assert_eq!(TABS.select(Some(&TabHint::new(""))), "news");
    assert_eq!(TABS.select(Some(&TabHint::new("PHOTO"))), "news");
  }

  #[test]
  fn default_is_member() {
    assert!(TABS.contains(TABS.default_tab()));
  }
}
