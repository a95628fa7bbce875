/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{MatchedPath, Path, State};
use axum::http::{HeaderMap, Uri};
use axum::response::Html;
use saminvest_server::page::PageRequest;
use saminvest_server::{
  CookieStore, DocumentParts, Notifier, ResolveData, RouteParams, SiteError, ToastBuffer,
  resolve_chain,
};

use super::{AppState, accept_language, cookie_header};
use crate::error::AxumError;

/// Validate the `{locale}` capture against the configured locales.
fn resolve_locale(
  state: &AppState,
  path_locale: Option<&str>,
  cookies: &CookieStore,
  headers: &HeaderMap,
) -> Result<String, SiteError> {
  if let Some(loc) = path_locale {
    if !state.i18n.is_supported(loc) {
      tracing::warn!(locale = loc, "unknown locale requested");
      return Err(SiteError::not_found("Unknown locale"));
    }
  }
  let data = ResolveData {
    path_locale,
    cookies,
    accept_language: accept_language(headers),
    locales: &state.i18n.locales,
    default_locale: &state.i18n.default,
  };
  Ok(resolve_chain(&state.strategies, &data))
}

/// Request path below the locale segment ("/uz/gallery" -> "/gallery").
fn path_below_locale(uri: &Uri) -> &str {
  let path = uri.path().strip_prefix('/').unwrap_or_else(|| uri.path());
  match path.find('/') {
    Some(pos) => &path[pos..],
    None => "",
  }
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  matched: MatchedPath,
  uri: Uri,
  headers: HeaderMap,
  captures: Result<Path<Vec<(String, String)>>, PathRejection>,
) -> Result<Html<String>, AxumError> {
  let Path(captures) = captures.map_err(|e| {
    tracing::debug!(error = %e, "path capture rejected");
    SiteError::validation(e.body_text())
  })?;
  let page = state
    .pages
    .get(matched.as_str())
    .ok_or_else(|| SiteError::not_found("Page not found"))?;

  let (path_locale, params) = RouteParams::new(captures).take_locale();
  let cookies = CookieStore::from_header(cookie_header(&headers).as_deref());
  let locale = resolve_locale(&state, path_locale.as_deref(), &cookies, &headers)?;

  let t = state.i18n.translator(&locale);
  let toasts = Arc::new(ToastBuffer::new());
  let notifier = Notifier::new(state.toast_provider.clone(), toasts.clone());

  let rendered = page.render(&PageRequest {
    params: &params,
    cookies: &cookies,
    t: &t,
    notifier: &notifier,
    images: &state.image_policy,
  })?;

  let queued = toasts.drain();
  let html = state.document.render(&DocumentParts {
    t: &t,
    path_rest: path_below_locale(&uri),
    locales: &state.i18n.locales,
    metadata: rendered.metadata.as_ref(),
    body: &rendered.body,
    toasts: &queued,
    provider: &state.toast_provider,
    widget: state.chat_widget.as_ref(),
  });

  Ok(Html(html))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn path_below_locale_strips_first_segment() {
    let uri = |s: &str| s.parse::<Uri>().unwrap();
    assert_eq!(path_below_locale(&uri("/uz")), "");
    assert_eq!(path_below_locale(&uri("/uz/gallery")), "/gallery");
    assert_eq!(path_below_locale(&uri("/ru/admin/media/7")), "/admin/media/7");
  }
}
