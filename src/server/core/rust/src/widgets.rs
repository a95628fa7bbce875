/* src/server/core/rust/src/widgets.rs */

use http::Uri;
use saminvest_injector::escape_html;
use serde::Deserialize;

/// Third-party chat widget loaded after the page becomes interactive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatWidget {
  pub widget_id: String,
  pub script_url: String,
}

impl ChatWidget {
  pub fn script_tag(&self) -> String {
    format!(
      r#"<script id="chat-widget" async src="{}" data-widget-id="{}"></script>"#,
      escape_html(&self.script_url),
      escape_html(&self.widget_id),
    )
  }
}

/// One allowed origin for remote images.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemotePattern {
  pub protocol: String,
  pub hostname: String,
  #[serde(default)]
  pub port: Option<u16>,
}

impl RemotePattern {
  fn matches(&self, uri: &Uri) -> bool {
    let scheme_ok = uri.scheme_str().is_some_and(|s| s.eq_ignore_ascii_case(&self.protocol));
    let host_ok = uri.host().is_some_and(|h| h.eq_ignore_ascii_case(&self.hostname));
    let port_ok = uri.port_u16() == self.port;
    scheme_ok && host_ok && port_ok
  }
}

/// Which image URLs pages may hand to the image pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImagePolicy {
  pub remote_patterns: Vec<RemotePattern>,
}

impl Default for ImagePolicy {
  fn default() -> Self {
    Self {
      remote_patterns: vec![RemotePattern {
        protocol: "http".to_string(),
        hostname: "localhost".to_string(),
        port: Some(8000),
      }],
    }
  }
}

impl ImagePolicy {
  /// Site-relative paths are always allowed; absolute URLs need a matching pattern.
  pub fn allows(&self, url: &str) -> bool {
    if url.starts_with('/') && !url.starts_with("//") {
      return true;
    }
    match url.parse::<Uri>() {
      Ok(uri) if uri.scheme().is_some() => self.remote_patterns.iter().any(|p| p.matches(&uri)),
      _ => false,
    }
  }
}
