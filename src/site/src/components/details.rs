/* src/site/src/components/details.rs */

use std::sync::Arc;

use saminvest_injector::Template;
use saminvest_server::{Component, SiteError, View};
use serde_json::json;

use crate::content::{ContentStore, Localized};

/// Admin view of the organisation's main contact details.
pub struct MainDetails {
  pub content: Arc<ContentStore>,
  pub template: Arc<Template>,
}

impl Component for MainDetails {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    let d = &self.content.details;
    let text = |l: &Localized| self.content.text(l, view.locale).to_string();
    Ok(self.template.render(&json!({
      "t": view.t.namespace("Admin.Details"),
      "company": text(&d.company),
      "address": text(&d.address),
      "phone": d.phone,
      "phone_href": format!("tel:{}", d.phone.replace(' ', "")),
      "email": d.email,
      "email_href": format!("mailto:{}", d.email),
      "working_hours": text(&d.working_hours),
    })))
  }
}
