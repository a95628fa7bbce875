/* src/site/src/components/gallery.rs */

use std::sync::Arc;

use saminvest_injector::Template;
use saminvest_server::{Component, SiteError, View};
use serde_json::{Value, json};

use crate::content::ContentStore;

/// Home page and `/gallery`: the photo gallery.
pub struct Gallery {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

impl Component for Gallery {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let items: Vec<Value> = self
      .content
      .gallery
      .iter()
      .filter(|item| {
        let allowed = view.images.allows(&item.image);
        if !allowed {
          tracing::warn!(id = %item.id, image = %item.image, "gallery image host not allowed");
        }
        allowed
      })
      .map(|item| {
        json!({
          "id": item.id,
          "src": item.image,
          "caption": self.content.text(&item.caption, view.locale),
        })
      })
      .collect();

    Ok(self.template.render(&json!({
      "t": view.t.namespace("Gallery"),
      "items": items,
    })))
  }
}
