/* src/server/core/rust/src/document.rs */

use saminvest_injector::Template;
use serde_json::json;

use crate::errors::SiteError;
use crate::escape::escape_script_json;
use crate::i18n::Translator;
use crate::metadata::PageMetadata;
use crate::notify::{Toast, ToastProvider};
use crate::widgets::ChatWidget;

/// Script id the client toast library reads its queue from.
pub const TOASTS_SCRIPT_ID: &str = "__toasts";

/// Built-in shell used when no layout template is configured.
pub const DEFAULT_LAYOUT: &str = concat!(
  "<!DOCTYPE html><!--sam:lang:attr:lang--><html><head><meta charset=\"utf-8\">",
  "<title><!--sam:title--></title>",
  "<!--sam:description:attr:content--><meta name=\"description\">",
  "</head><body><!--sam:body:html--></body></html>",
);

/// Everything the document shell needs besides the page body.
pub struct DocumentParts<'a> {
  pub t: &'a Translator,
  /// Request path without the locale segment, used for language links.
  pub path_rest: &'a str,
  pub locales: &'a [String],
  pub metadata: Option<&'a PageMetadata>,
  pub body: &'a str,
  pub toasts: &'a [Toast],
  pub provider: &'a ToastProvider,
  pub widget: Option<&'a ChatWidget>,
}

/// The HTML document shell every page is wrapped in.
#[derive(Debug)]
pub struct Document {
  layout: Template,
  /// Named paths exposed to the layout as `links.{name}`, prefixed with the locale.
  links: Vec<(String, String)>,
}

impl Document {
  pub fn new(layout: &str) -> Result<Self, SiteError> {
    Ok(Self { layout: Template::parse(layout)?, links: Vec::new() })
  }

  /// Expose `/{locale}{path}` to the layout as `links.{name}`.
  pub fn link(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
    self.links.push((name.into(), path.into()));
    self
  }

  pub fn render(&self, parts: &DocumentParts<'_>) -> String {
    let locale = parts.t.locale();
    let (title, description) = match parts.metadata {
      Some(meta) => (meta.title.clone(), meta.description.clone()),
      None => (parts.t.t("Site.title"), parts.t.t("Site.description")),
    };
    let languages: Vec<serde_json::Value> = parts
      .locales
      .iter()
      .map(|code| {
        json!({
          "code": code,
          "href": format!("/{code}{}", parts.path_rest),
          "active": code == locale,
        })
      })
      .collect();
    let links: serde_json::Map<String, serde_json::Value> = self
      .links
      .iter()
      .map(|(name, path)| (name.clone(), format!("/{locale}{path}").into()))
      .collect();

    let data = json!({
      "lang": locale,
      "title": title,
      "description": description,
      "body": parts.body,
      "languages": languages,
      "links": links,
      "t": parts.t.namespace("Layout"),
    });
    let mut html = self.layout.render(&data);

    let mut tail = toasts_script(parts.toasts, parts.provider);
    if let Some(widget) = parts.widget {
      tail.push_str(&widget.script_tag());
    }
    match html.rfind("</body>") {
      Some(pos) => html.insert_str(pos, &tail),
      None => html.push_str(&tail),
    }
    html
  }
}

fn toasts_script(toasts: &[Toast], provider: &ToastProvider) -> String {
  let payload = json!({ "provider": provider, "toasts": toasts });
  format!(
    r#"<script id="{TOASTS_SCRIPT_ID}" type="application/json">{}</script>"#,
    escape_script_json(&payload.to_string()),
  )
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;
  use crate::i18n::I18nConfig;
  use crate::notify::{Severity, ToastOptions};

  fn translator(locale: &str) -> Translator {
    let mut m = HashMap::new();
    m.insert("en".to_string(), json!({"Site": {"title": "Saminvest", "description": "Board"}}));
    I18nConfig::new(vec!["en".into(), "ru".into()], "en", m).translator(locale)
  }

  fn parts<'a>(
    t: &'a Translator,
    locales: &'a [String],
    provider: &'a ToastProvider,
    toasts: &'a [Toast],
  ) -> DocumentParts<'a> {
    DocumentParts {
      t,
      path_rest: "/gallery",
      locales,
      metadata: None,
      body: "<h1>Gallery</h1>",
      toasts,
      provider,
      widget: None,
    }
  }

  #[test]
  fn default_layout_fills_shell() {
    let t = translator("en");
    let locales = vec!["en".to_string()];
    let provider = ToastProvider::default();
    let html = Document::new(DEFAULT_LAYOUT).unwrap().render(&parts(&t, &locales, &provider, &[]));
    assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(html.contains("<title>Saminvest</title>"));
    assert!(html.contains("<meta content=\"Board\" name=\"description\">"));
    assert!(html.contains("<body><h1>Gallery</h1><script id=\"__toasts\""));
    assert!(html.ends_with("</script></body></html>"));
  }

  #[test]
  fn metadata_overrides_site_defaults() {
    let t = translator("en");
    let locales = vec!["en".to_string()];
    let provider = ToastProvider::default();
    let meta = PageMetadata { title: "Admin Panel | Menus".into(), description: "d".into() };
    let mut p = parts(&t, &locales, &provider, &[]);
    p.metadata = Some(&meta);
    let html = Document::new(DEFAULT_LAYOUT).unwrap().render(&p);
    assert!(html.contains("<title>Admin Panel | Menus</title>"));
  }

  #[test]
  fn toasts_embedded_with_provider() {
    let t = translator("en");
    let locales = vec!["en".to_string()];
    let provider = ToastProvider::default();
    let toasts = vec![Toast {
      message: "</script>".into(),
      severity: Severity::Warning,
      auto_close_ms: 5000,
      options: ToastOptions::new(),
    }];
    let html = Document::new(DEFAULT_LAYOUT).unwrap().render(&parts(&t, &locales, &provider, &toasts));
    assert!(html.contains(r#""autoCloseMs":5000"#));
    assert!(html.contains(r#""severity":"warning""#));
    assert!(html.contains(r"\u003c/script\u003e"));
  }

  #[test]
  fn chat_widget_after_content() {
    let t = translator("en");
    let locales = vec!["en".to_string()];
    let provider = ToastProvider::default();
    let widget = ChatWidget { widget_id: "w-1".into(), script_url: "https://chat.example/w.js".into() };
    let mut p = parts(&t, &locales, &provider, &[]);
    p.widget = Some(&widget);
    let html = Document::new(DEFAULT_LAYOUT).unwrap().render(&p);
    let body_at = html.find("<h1>").unwrap_or(usize::MAX);
    let widget_at = html.find("data-widget-id=\"w-1\"").unwrap_or(0);
    assert!(widget_at > body_at);
  }

  #[test]
  fn language_links_keep_path() {
    let layout = "<body><!--sam:each:languages--><!--sam:$.href--> <!--sam:endeach--></body>";
    let doc = Document::new(layout).unwrap();
    let t = translator("ru");
    let locales = vec!["en".to_string(), "ru".to_string()];
    let provider = ToastProvider::default();
    let html = doc.render(&parts(&t, &locales, &provider, &[]));
    assert!(html.starts_with("<body>/en/gallery /ru/gallery <script"));
  }

  #[test]
  fn named_links_get_locale_prefix() {
    let layout = "<nav><!--sam:links.home:attr:href--><a>h</a><!--sam:links.admin:attr:href--><a>a</a></nav>";
    let doc = Document::new(layout).unwrap();
    let doc = doc.link("home", "").link("admin", "/admin");
    let t = translator("ru");
    let locales = vec!["ru".to_string()];
    let provider = ToastProvider::default();
    let html = doc.render(&parts(&t, &locales, &provider, &[]));
    assert!(html.starts_with(r#"<nav><a href="/ru">h</a><a href="/ru/admin">a</a></nav>"#), "{html}");
  }
}
