/* src/site/src/components/admin.rs */

use std::sync::Arc;

use saminvest_injector::Template;
use saminvest_server::{ADMIN_PUBLICATION_TAB, Component, SiteError, ToastOptions, View};
use serde_json::{Value, json};

use super::publication::card;
use super::{PUBLICATION_TABS, select_tab, tab_strip};
use crate::content::{ContentStore, Localized, MenuItem, Publication};

/// Every translation of `text`, ordered by locale code.
fn translations(text: &Localized) -> Vec<Value> {
  let mut all: Vec<(&str, &str)> = text.locales().collect();
  all.sort_unstable();
  all.into_iter().map(|(locale, value)| json!({ "locale": locale, "text": value })).collect()
}

/// Admin landing page: content counts per area.
pub struct Dashboard {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

impl Component for Dashboard {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let locale = view.locale;
    let tabs: Vec<Value> = PUBLICATION_TABS
      .names()
      .iter()
      .map(|name| {
        json!({
          "label": view.t.t(&format!("Tabs.{name}")),
          "count": self.content.publications_of(name).len(),
        })
      })
      .collect();

    Ok(self.template.render(&json!({
      "t": view.t.namespace("Admin.Dashboard"),
      "links": {
        "media": format!("/{locale}/admin/media"),
        "menus": format!("/{locale}/admin/menus"),
        "details": format!("/{locale}/admin/details"),
      },
      "publications": tabs,
      "gallery": self.content.gallery.len(),
      "menus": self.content.menus.len(),
    })))
  }
}

/// Admin media: tabbed publication list, or one publication when an id is given.
pub struct AdminPublication {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

impl AdminPublication {
  fn list(&self, view: &View<'_>, active: &str) -> Value {
    let items: Vec<Value> = self
      .content
      .publications_of(active)
      .into_iter()
      .map(|p| {
        let href = format!("/{}/admin/media/{}", view.locale, p.id);
        card(&self.content, p, view.locale, view.images, href)
      })
      .collect();
    json!({
      "tabs": tab_strip(view.t, active, ADMIN_PUBLICATION_TAB),
      "active": active,
      "items": items,
    })
  }

  fn item(&self, view: &View<'_>, p: &Publication, active: &str) -> Value {
    json!({
      "id": p.id,
      "kind": p.kind,
      "date": p.date,
      "title": translations(&p.title),
      "summary": translations(&p.summary),
      "image": p.image,
      "image_allowed": p.image.as_deref().is_some_and(|src| view.images.allows(src)),
      "video": p.video_url,
      "back": format!("/{}/admin/media", view.locale),
      "back_tab": active,
    })
  }
}

impl Component for AdminPublication {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let t = view.t.namespace("Admin.Media");
    let data = match view.id {
      None => json!({ "t": t, "list": self.list(view, select_tab(view.tab)) }),
      Some(id) => match self.content.publication(id) {
        Some(p) => json!({ "t": t, "item": self.item(view, p, select_tab(view.tab)) }),
        None => {
          tracing::warn!(id, "admin requested unknown publication");
          let message = view.t.t_with("Admin.Media.notFound", &[("id", id)]);
          view.notifier.warning(message, ToastOptions::new());
          json!({ "t": t, "list": self.list(view, PUBLICATION_TABS.default_tab()) })
        }
      },
    };
    Ok(self.template.render(&data))
  }
}

/// Admin navigation menu editor view.
pub struct AdminMenus {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

fn flatten_menus<'a>(items: &'a [MenuItem], depth: usize, out: &mut Vec<(usize, &'a MenuItem)>) {
  for item in items {
    out.push((depth, item));
    flatten_menus(&item.children, depth + 1, out);
  }
}

impl Component for AdminMenus {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let mut flat = Vec::new();
    flatten_menus(&self.content.menus, 0, &mut flat);
    let rows: Vec<Value> = flat
      .into_iter()
      .map(|(depth, item)| {
        json!({
          "id": item.id,
          "href": item.href,
          "depth": depth,
          "indent": format!("padding-left: {}rem", depth * 2),
          "label": self.content.text(&item.label, view.locale),
          "translations": translations(&item.label),
        })
      })
      .collect();

    Ok(self.template.render(&json!({
      "t": view.t.namespace("Admin.Menus"),
      "rows": rows,
    })))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn menus_flatten_depth_first() {
    let raw = r#"{"menus": [
      {"id": "a", "href": "/a", "label": {}, "children": [
        {"id": "a1", "href": "/a/1", "label": {}, "children": [
          {"id": "a1x", "href": "/a/1/x", "label": {}}
        ]}
      ]},
      {"id": "b", "href": "/b", "label": {}}
    ]}"#;
    let store = ContentStore::from_json(raw, "uz").expect("content");
    let mut flat = Vec::new();
    flatten_menus(&store.menus, 0, &mut flat);
    let got: Vec<(usize, &str)> = flat.iter().map(|(d, m)| (*d, m.id.as_str())).collect();
    assert_eq!(got, [(0, "a"), (1, "a1"), (2, "a1x"), (0, "b")]);
  }

  #[test]
  fn translations_sorted_by_locale() {
    let label: Localized =
      serde_json::from_str(r#"{"uz": "Biz", "en": "About", "ru": "О нас"}"#).expect("label");
    let locales: Vec<Value> = translations(&label).into_iter().map(|v| v["locale"].clone()).collect();
    assert_eq!(locales, [json!("en"), json!("ru"), json!("uz")]);
  }
}
