/* src/server/core/rust/src/cookie.rs */

/// Read-only view of the cookies sent with one request.
#[derive(Debug, Clone, Default)]
pub struct CookieStore {
  pairs: Vec<(String, String)>,
}

impl CookieStore {
  /// Parse a `Cookie` request header (`a=1; b=2`).
  /// Names are trimmed of surrounding whitespace; values are kept as sent.
  pub fn from_header(header: Option<&str>) -> Self {
    let pairs = header
      .into_iter()
      .flat_map(|h| h.split(';'))
      .filter_map(|pair| {
        let pair = pair.strip_prefix(' ').unwrap_or(pair);
        let (name, value) = pair.split_once('=')?;
        let name = name.trim();
        (!name.is_empty()).then(|| (name.to_string(), value.to_string()))
      })
      .collect();
    Self { pairs }
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.pairs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
  }

  pub fn is_empty(&self) -> bool {
    self.pairs.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_header() {
    let store = CookieStore::from_header(None);
    assert!(store.is_empty());
    assert_eq!(store.get("publication-tab"), None);
  }

  #[test]
  fn multiple_pairs() {
    let store = CookieStore::from_header(Some("a=1; publication-tab=photo; b=2"));
    assert_eq!(store.get("publication-tab"), Some("photo"));
    assert_eq!(store.get("b"), Some("2"));
  }

  #[test]
  fn empty_value_present() {
    let store = CookieStore::from_header(Some("admin-publication-tab="));
    assert_eq!(store.get("admin-publication-tab"), Some(""));
  }

  #[test]
  fn value_case_and_padding_preserved() {
    let store = CookieStore::from_header(Some("t=  MiXeD =x"));
    assert_eq!(store.get("t"), Some("  MiXeD =x"));
  }

  #[test]
  fn first_occurrence_wins() {
    let store = CookieStore::from_header(Some("t=one; t=two"));
    assert_eq!(store.get("t"), Some("one"));
  }

  #[test]
  fn pairs_without_equals_ignored() {
    let store = CookieStore::from_header(Some("flag; t=v"));
    assert_eq!(store.get("flag"), None);
    assert_eq!(store.get("t"), Some("v"));
  }
}
