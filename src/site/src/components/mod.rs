/* src/site/src/components/mod.rs */

// Presentational components. Each turns a `View` (locale, id, tab hint) plus
// site content into an HTML fragment through its template.

mod admin;
mod details;
mod gallery;
mod publication;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use saminvest_injector::Template;
use saminvest_server::{TabHint, TabSet, Translator};
use serde_json::{Value, json};

pub use admin::{AdminMenus, AdminPublication, Dashboard};
pub use details::MainDetails;
pub use gallery::Gallery;
pub use publication::{PublicationItem, PublicationList};

/// Publication tabs, shared by the public and admin views.
pub const PUBLICATION_TABS: TabSet = TabSet::new(&["news", "photo", "video"], "news");

/// Parsed component templates, loaded once from the templates directory.
pub struct Templates {
  pub gallery: Arc<Template>,
  pub publication_list: Arc<Template>,
  pub publication_item: Arc<Template>,
  pub dashboard: Arc<Template>,
  pub admin_publication: Arc<Template>,
  pub admin_menus: Arc<Template>,
  pub main_details: Arc<Template>,
  /// Document shell; the built-in shell is used when absent.
  pub layout: Option<String>,
}

impl Templates {
  pub fn load(dir: &Path) -> Result<Self> {
    let layout_path = dir.join("layout.html");
    let layout = if layout_path.is_file() {
      Some(
        std::fs::read_to_string(&layout_path)
          .with_context(|| format!("failed to read {}", layout_path.display()))?,
      )
    } else {
      tracing::warn!(path = %layout_path.display(), "no layout template, using built-in shell");
      None
    };
    Ok(Self {
      gallery: load_one(dir, "gallery.html")?,
      publication_list: load_one(dir, "publication_list.html")?,
      publication_item: load_one(dir, "publication_item.html")?,
      dashboard: load_one(dir, "dashboard.html")?,
      admin_publication: load_one(dir, "admin_publication.html")?,
      admin_menus: load_one(dir, "admin_menus.html")?,
      main_details: load_one(dir, "main_details.html")?,
      layout,
    })
  }
}

fn load_one(dir: &Path, name: &str) -> Result<Arc<Template>> {
  let path = dir.join(name);
  let source =
    std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))?;
  let template = Template::parse(&source).with_context(|| format!("failed to parse {}", path.display()))?;
  Ok(Arc::new(template))
}

/// Tab strip entries. `cookie` is the name the client writes on click.
fn tab_strip(t: &Translator, active: &str, cookie: &str) -> Vec<Value> {
  PUBLICATION_TABS
    .names()
    .iter()
    .map(|name| {
      json!({
        "name": name,
        "label": t.t(&format!("Tabs.{name}")),
        "cookie": cookie,
        "class": if *name == active { "tab active" } else { "tab" },
      })
    })
    .collect()
}

/// Effective tab for a hint, logging hints that name no known tab.
fn select_tab(hint: Option<&TabHint>) -> &'static str {
  let tab = PUBLICATION_TABS.select(hint);
  if let Some(hint) = hint {
    if hint.raw() != tab {
      tracing::debug!(hint = hint.raw(), tab, "unknown tab hint, using default");
    }
  }
  tab
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use saminvest_server::{
    Component, I18nConfig, ImagePolicy, Notifier, ToastBuffer, ToastProvider, View,
  };

  use super::*;
  use crate::content::ContentStore;

  const CONTENT: &str = r#"{
    "gallery": [
      {"id": "ok", "image": "http://localhost:8000/a.jpg", "caption": {"en": "Allowed"}},
      {"id": "no", "image": "https://elsewhere.example/b.jpg", "caption": {"en": "Blocked"}}
    ],
    "publications": [
      {"id": "n1", "kind": "news", "date": "2024-01-01", "title": {"en": "News one"}},
      {"id": "v1", "kind": "video", "date": "2024-01-02", "title": {"en": "Video one"}}
    ]
  }"#;

  struct Fixture {
    t: Translator,
    notifier: Notifier,
    toasts: Arc<ToastBuffer>,
    images: ImagePolicy,
    content: Arc<ContentStore>,
  }

  impl Fixture {
    fn new() -> Self {
      let mut m = HashMap::new();
      m.insert(
        "en".to_string(),
        json!({
          "Tabs": {"news": "News", "photo": "Photo", "video": "Video"},
          "Admin": {"Media": {"notFound": "Publication \"{id}\" was not found"}},
        }),
      );
      let toasts = Arc::new(ToastBuffer::new());
      Self {
        t: I18nConfig::new(vec!["en".into()], "en", m).translator("en"),
        notifier: Notifier::new(ToastProvider::default(), toasts.clone()),
        toasts,
        images: ImagePolicy::default(),
        content: Arc::new(ContentStore::from_json(CONTENT, "en").expect("content")),
      }
    }

    fn view<'a>(&'a self, id: Option<&'a str>, tab: Option<&'a TabHint>) -> View<'a> {
      View { locale: "en", t: &self.t, id, tab, notifier: &self.notifier, images: &self.images }
    }
  }

  fn template(src: &str) -> Arc<Template> {
    Arc::new(Template::parse(src).expect("template"))
  }

  #[test]
  fn select_tab_defaults_for_unknown_hints() {
    assert_eq!(select_tab(None), "news");
    assert_eq!(select_tab(Some(&TabHint::new("video"))), "video");
    assert_eq!(select_tab(Some(&TabHint::new(" video"))), "news");
    assert_eq!(select_tab(Some(&TabHint::new(""))), "news");
  }

  #[test]
  fn tab_strip_marks_active() {
    let fx = Fixture::new();
    let strip = tab_strip(&fx.t, "photo", "publication-tab");
    let classes: Vec<&str> = strip.iter().filter_map(|t| t["class"].as_str()).collect();
    assert_eq!(classes, ["tab", "tab active", "tab"]);
    assert_eq!(strip[2]["label"], json!("Video"));
    assert_eq!(strip[0]["cookie"], json!("publication-tab"));
  }

  #[test]
  fn gallery_skips_disallowed_hosts() {
    let fx = Fixture::new();
    let gallery = Gallery {
      content: fx.content.clone(),
      template: template("<!--sam:each:items--><!--sam:$.id--> <!--sam:endeach-->"),
    };
    let html = gallery.render(&fx.view(None, None)).expect("render");
    assert_eq!(html, "ok ");
  }

  #[test]
  fn publication_list_follows_tab_hint() {
    let fx = Fixture::new();
    let list = PublicationList {
      content: fx.content.clone(),
      template: template("<!--sam:active-->:<!--sam:each:items--><!--sam:$.href--><!--sam:endeach-->"),
    };
    let hint = TabHint::new("video");
    assert_eq!(list.render(&fx.view(None, Some(&hint))).expect("render"), "video:/en/publications/v1");
    assert_eq!(list.render(&fx.view(None, None)).expect("render"), "news:/en/publications/n1");
  }

  #[test]
  fn unknown_public_item_is_not_found() {
    let fx = Fixture::new();
    let item = PublicationItem { content: fx.content.clone(), template: template("") };
    let err = item.render(&fx.view(Some("missing"), None)).expect_err("not found");
    assert_eq!(err.status(), 404);
    assert!(fx.toasts.drain().is_empty());
  }

  #[test]
  fn unknown_admin_item_warns_and_lists_default_tab() {
    let fx = Fixture::new();
    let media = AdminPublication {
      content: fx.content.clone(),
      template: template("<!--sam:if:item-->item<!--sam:else--><!--sam:list.active--><!--sam:endif:item-->"),
    };
    let hint = TabHint::new("video");
    let html = media.render(&fx.view(Some("x/y"), Some(&hint))).expect("render");
    assert_eq!(html, "news");
    let toasts = fx.toasts.drain();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].message, "Publication \"x/y\" was not found");
    assert_eq!(toasts[0].auto_close_ms, 5000);

    let html = media.render(&fx.view(Some("v1"), Some(&hint))).expect("render");
    assert_eq!(html, "item");
    assert!(fx.toasts.drain().is_empty());
  }
}
