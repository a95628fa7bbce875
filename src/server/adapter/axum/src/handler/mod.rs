/* src/server/adapter/axum/src/handler/mod.rs */

mod locale;
mod page;
mod robots;


use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use saminvest_server::page::PageDef;
use saminvest_server::{
  ChatWidget, Document, I18nConfig, ImagePolicy, ResolveStrategy, SiteParts, ToastProvider,
};

pub(crate) struct AppState {
  /// Full axum route pattern -> page
  pub pages: HashMap<String, Arc<PageDef>>,
  pub i18n: I18nConfig,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub document: Document,
  pub toast_provider: ToastProvider,
  pub chat_widget: Option<ChatWidget>,
  pub image_policy: ImagePolicy,
}

/// Axum route for a page mounted under the locale segment.
fn locale_route(route: &str) -> String {
  match route {
    "" | "/" => "/{locale}".to_string(),
    other => format!("/{{locale}}{other}"),
  }
}

pub(crate) fn build_router(parts: SiteParts) -> Router {
  let mut page_map = HashMap::new();
  let mut router = Router::new()
    .route(saminvest_server::robots::ROBOTS_PATH, get(robots::handle_robots))
    .route("/", get(locale::handle_root));

  for page in parts.pages {
    let full_route = locale_route(&page.route);
    tracing::debug!(route = %full_route, tab_cookie = ?page.tab_cookie, "page registered");
    page_map.insert(full_route.clone(), Arc::new(page));
    router = router.route(&full_route, get(page::handle_page));
  }

  let state = Arc::new(AppState {
    pages: page_map,
    i18n: parts.i18n_config,
    strategies: parts.strategies,
    document: parts.document,
    toast_provider: parts.toast_provider,
    chat_widget: parts.chat_widget,
    image_policy: parts.image_policy,
  });

  router.with_state(state)
}

/// Every `Cookie` field joined with "; ". Bytes that are not UTF-8 are
/// replaced, so one odd value never hides its siblings.
pub(super) fn cookie_header(headers: &axum::http::HeaderMap) -> Option<String> {
  let fields: Vec<_> = headers
    .get_all(axum::http::header::COOKIE)
    .iter()
    .map(|v| String::from_utf8_lossy(v.as_bytes()))
    .collect();
  if fields.is_empty() { None } else { Some(fields.join("; ")) }
}

pub(super) fn accept_language(headers: &axum::http::HeaderMap) -> Option<&str> {
  headers.get(axum::http::header::ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok())
}
