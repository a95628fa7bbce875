/* src/server/core/rust/src/i18n/resolve.rs */

use crate::cookie::CookieStore;

/// Request facts a strategy may use to pick a locale.
pub struct ResolveData<'a> {
  pub path_locale: Option<&'a str>,
  pub cookies: &'a CookieStore,
  pub accept_language: Option<&'a str>,
  pub locales: &'a [String],
  pub default_locale: &'a str,
}

impl ResolveData<'_> {
  fn supported(&self, locale: &str) -> Option<String> {
    self.locales.iter().find(|l| *l == locale).cloned()
  }
}

pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<String>;
}

struct UrlPrefix;

impl ResolveStrategy for UrlPrefix {
  fn kind(&self) -> &'static str {
    "url_prefix"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    data.supported(data.path_locale?)
  }
}

struct Cookie {
  name: String,
}

impl ResolveStrategy for Cookie {
  fn kind(&self) -> &'static str {
    "cookie"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    data.supported(data.cookies.get(&self.name)?.trim())
  }
}

struct AcceptLanguage;

impl ResolveStrategy for AcceptLanguage {
  fn kind(&self) -> &'static str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    parse_accept_language(data.accept_language?, data.locales)
  }
}

/// Locale from the `/{locale}/...` path segment.
pub fn from_url_prefix() -> Box<dyn ResolveStrategy> {
  Box::new(UrlPrefix)
}

/// Locale from a cookie, when it names a supported locale.
pub fn from_cookie(name: impl Into<String>) -> Box<dyn ResolveStrategy> {
  Box::new(Cookie { name: name.into() })
}

/// Locale from the `Accept-Language` header, honouring q-values.
pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(AcceptLanguage)
}

/// Default chain: path segment -> `site-locale` cookie -> Accept-Language.
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_prefix(), from_cookie("site-locale"), from_accept_language()]
}

/// First locale any strategy yields, else the default locale.
pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> String {
  strategies
    .iter()
    .find_map(|s| s.resolve(data))
    .unwrap_or_else(|| data.default_locale.to_string())
}

fn parse_accept_language(header: &str, locales: &[String]) -> Option<String> {
  let mut entries: Vec<(&str, f64)> = header
    .split(',')
    .filter_map(|part| {
      let mut segments = part.trim().split(';');
      let lang = segments.next()?.trim();
      if lang.is_empty() {
        return None;
      }
      let q = segments
        .filter_map(|s| s.trim().strip_prefix("q="))
        .find_map(|v| v.parse::<f64>().ok())
        .unwrap_or(1.0);
      Some((lang, q))
    })
    .collect();

  // Stable sort keeps header order among equal weights
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  entries.iter().find_map(|(lang, _)| {
    let exact = locales.iter().find(|l| l.eq_ignore_ascii_case(lang));
    // Prefix match: ru-RU -> ru
    let prefix = || {
      let (primary, _) = lang.split_once('-')?;
      locales.iter().find(|l| l.eq_ignore_ascii_case(primary))
    };
    exact.or_else(prefix).cloned()
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn locales() -> Vec<String> {
    vec!["uz".into(), "ru".into(), "en".into()]
  }

  fn resolve(path: Option<&str>, cookie: Option<&str>, accept: Option<&str>) -> String {
    let cookies = CookieStore::from_header(cookie);
    let locales = locales();
    let data = ResolveData {
      path_locale: path,
      cookies: &cookies,
      accept_language: accept,
      locales: &locales,
      default_locale: "uz",
    };
    resolve_chain(&default_strategies(), &data)
  }

  #[test]
  fn path_locale_wins() {
    assert_eq!(resolve(Some("ru"), Some("site-locale=en"), Some("en")), "ru");
  }

  #[test]
  fn unknown_path_locale_falls_through() {
    assert_eq!(resolve(Some("fr"), Some("site-locale=en"), None), "en");
  }

  #[test]
  fn cookie_beats_accept_language() {
    assert_eq!(resolve(None, Some("site-locale=en"), Some("ru")), "en");
  }

  #[test]
  fn accept_language_q_values() {
    assert_eq!(resolve(None, None, Some("en;q=0.4, ru;q=0.9")), "ru");
  }

  #[test]
  fn accept_language_prefix_match() {
    assert_eq!(resolve(None, None, Some("ru-RU,en;q=0.5")), "ru");
  }

  #[test]
  fn falls_back_to_default() {
    assert_eq!(resolve(None, None, None), "uz");
    assert_eq!(resolve(None, Some("site-locale=de"), Some("de,fr")), "uz");
  }

  #[test]
  fn strategy_kinds() {
    let kinds: Vec<&str> = default_strategies().iter().map(|s| s.kind()).collect();
    assert_eq!(kinds, ["url_prefix", "cookie", "accept_language"]);
  }

  #[test]
  fn empty_accept_language() {
    assert_eq!(parse_accept_language("", &locales()), None);
  }
}
