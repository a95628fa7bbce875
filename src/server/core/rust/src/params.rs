/* src/server/core/rust/src/params.rs */

/// Path captures of a matched route, in the order they appear in the path.
/// Values are kept exactly as the router decoded them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
  entries: Vec<(String, String)>,
}

impl RouteParams {
  pub fn new(entries: Vec<(String, String)>) -> Self {
    Self { entries }
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
  }

  /// The opaque content identifier, when the route has one.
  pub fn id(&self) -> Option<&str> {
    self.get("id")
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Split off the `locale` capture, leaving the remaining params in order.
  pub fn take_locale(mut self) -> (Option<String>, Self) {
    let locale = self
      .entries
      .iter()
      .position(|(k, _)| k == "locale")
      .map(|i| self.entries.remove(i).1);
    (locale, self)
  }
}

impl FromIterator<(String, String)> for RouteParams {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    Self::new(iter.into_iter().collect())
  }
}
