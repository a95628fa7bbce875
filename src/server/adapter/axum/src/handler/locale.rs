/* src/server/adapter/axum/src/handler/locale.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Redirect;
use saminvest_server::{CookieStore, ResolveData, resolve_chain};

use super::{AppState, accept_language, cookie_header};

/// `GET /`: send the visitor to their preferred locale.
pub(super) async fn handle_root(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Redirect {
  let cookies = CookieStore::from_header(cookie_header(&headers).as_deref());
  let data = ResolveData {
    path_locale: None,
    cookies: &cookies,
    accept_language: accept_language(&headers),
    locales: &state.i18n.locales,
    default_locale: &state.i18n.default,
  };
  let locale = resolve_chain(&state.strategies, &data);
  tracing::debug!(%locale, "root redirect");
  Redirect::to(&format!("/{locale}"))
}
