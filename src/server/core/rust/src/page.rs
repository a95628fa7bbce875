/* src/server/core/rust/src/page.rs */

use std::sync::Arc;

use crate::cookie::CookieStore;
use crate::errors::SiteError;
use crate::i18n::Translator;
use crate::metadata::PageMetadata;
use crate::notify::Notifier;
use crate::params::RouteParams;
use crate::tab::{TabHint, read_tab};
use crate::widgets::ImagePolicy;

/// Inputs a presentational component renders from.
pub struct View<'a> {
  pub locale: &'a str,
  pub t: &'a Translator,
  /// Route `id`, untouched.
  pub id: Option<&'a str>,
  /// Tab cookie value, untouched. Components pick the effective tab with
  /// [`crate::tab::TabSet::select`].
  pub tab: Option<&'a TabHint>,
  pub notifier: &'a Notifier,
  pub images: &'a ImagePolicy,
}

pub trait Component: Send + Sync {
  fn render(&self, view: &View<'_>) -> Result<String, SiteError>;
}

impl<F> Component for F
where
  F: Fn(&View<'_>) -> Result<String, SiteError> + Send + Sync,
{
  fn render(&self, view: &View<'_>) -> Result<String, SiteError> {
    self(view)
  }
}

pub type MetadataFn = Arc<dyn Fn(&Translator) -> PageMetadata + Send + Sync>;

/// Per-request context handed to [`PageDef::render`].
pub struct PageRequest<'a> {
  pub params: &'a RouteParams,
  pub cookies: &'a CookieStore,
  pub t: &'a Translator,
  pub notifier: &'a Notifier,
  pub images: &'a ImagePolicy,
}

#[derive(Debug)]
pub struct RenderedPage {
  pub body: String,
  pub metadata: Option<PageMetadata>,
}

pub struct PageDef {
  /// Axum route syntax below the locale segment, e.g. "/publications/{id}"
  pub route: String,
  /// Cookie holding the last-selected tab, for tabbed list/detail pages.
  pub tab_cookie: Option<String>,
  pub component: Arc<dyn Component>,
  pub metadata: Option<MetadataFn>,
}

impl PageDef {
  pub fn new(route: impl Into<String>, component: impl Component + 'static) -> Self {
    Self { route: route.into(), tab_cookie: None, component: Arc::new(component), metadata: None }
  }

  /// A page whose component receives the tab remembered in `cookie_name`.
  pub fn tabbed(
    route: impl Into<String>,
    cookie_name: impl Into<String>,
    component: impl Component + 'static,
  ) -> Self {
    Self { tab_cookie: Some(cookie_name.into()), ..Self::new(route, component) }
  }

  pub fn metadata(
    mut self,
    f: impl Fn(&Translator) -> PageMetadata + Send + Sync + 'static,
  ) -> Self {
    self.metadata = Some(Arc::new(f));
    self
  }

  pub fn render(&self, req: &PageRequest<'_>) -> Result<RenderedPage, SiteError> {
    let tab = self.tab_cookie.as_deref().and_then(|name| read_tab(req.cookies, name));
    let view = View {
      locale: req.t.locale(),
      t: req.t,
      id: req.params.id(),
      tab: tab.as_ref(),
      notifier: req.notifier,
      images: req.images,
    };
    tracing::debug!(
      route = %self.route,
      locale = view.locale,
      id = ?view.id,
      tab = ?view.tab.map(TabHint::raw),
      "rendering page"
    );
    let body = self.component.render(&view)?;
    let metadata = self.metadata.as_ref().map(|f| f(req.t));
    Ok(RenderedPage { body, metadata })
  }
}
