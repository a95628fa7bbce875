/* src/site/src/components/publication.rs */

use std::sync::Arc;

use saminvest_injector::Template;
use saminvest_server::{Component, ImagePolicy, PUBLICATION_TAB, SiteError, View};
use serde_json::{Value, json};

use super::{select_tab, tab_strip};
use crate::content::{ContentStore, Publication};

/// Card data for a publication in a list.
pub(super) fn card(
  content: &ContentStore,
  p: &Publication,
  locale: &str,
  images: &ImagePolicy,
  href: String,
) -> Value {
  json!({
    "id": p.id,
    "kind": p.kind,
    "href": href,
    "date": p.date,
    "title": content.text(&p.title, locale),
    "summary": content.text(&p.summary, locale),
    "image": p.image.as_deref().filter(|src| images.allows(src)),
  })
}

/// Public publication list with news/photo/video tabs.
pub struct PublicationList {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

impl Component for PublicationList {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let active = select_tab(view.tab);
    let items: Vec<Value> = self
      .content
      .publications_of(active)
      .into_iter()
      .map(|p| {
        let href = format!("/{}/publications/{}", view.locale, p.id);
        card(&self.content, p, view.locale, view.images, href)
      })
      .collect();

    Ok(self.template.render(&json!({
      "t": view.t.namespace("Publications"),
      "tabs": tab_strip(view.t, active, PUBLICATION_TAB),
      "active": active,
      "items": items,
    })))
  }
}

/// Single public publication. The tab hint picks which list tab "back" returns to.
pub struct PublicationItem {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

impl Component for PublicationItem {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let id = view.id.unwrap_or_default();
    let Some(p) = self.content.publication(id) else {
      return Err(SiteError::not_found(format!("publication \"{id}\" not found")));
    };
    let back_tab = select_tab(view.tab);
    let locale = view.locale;

    Ok(self.template.render(&json!({
      "t": view.t.namespace("Publications"),
      "back": { "href": format!("/{locale}/publications"), "tab": back_tab },
      "item": {
        "id": p.id,
        "kind": p.kind,
        "date": p.date,
        "title": self.content.text(&p.title, locale),
        "body": self.content.text(&p.body, locale),
        "image": p.image.as_deref().filter(|src| view.images.allows(src)),
        "video": p.video_url,
      },
    })))
  }
}
