/* src/server/adapter/axum/src/handler/robots.rs */

use axum::http::header;
use axum::response::IntoResponse;
use saminvest_server::robots::{ROBOTS_CONTENT_TYPE, ROBOTS_TXT};

pub(super) async fn handle_robots() -> impl IntoResponse {
  ([(header::CONTENT_TYPE, ROBOTS_CONTENT_TYPE)], ROBOTS_TXT)
}
