/* src/site/src/app.rs */

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use saminvest_server::{Document, SiteServer, load_i18n_config};
use saminvest_server_axum::IntoAxumRouter;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::components::Templates;
use crate::config::SiteConfig;
use crate::content::ContentStore;
use crate::pages;

/// Load catalogs, content and templates, and register every page.
pub fn build_site(config: &SiteConfig) -> Result<SiteServer> {
  let i18n = load_i18n_config(
    &config.resolve(&config.i18n.messages_dir),
    &config.i18n.locales,
    &config.i18n.default,
  )
  .context("failed to load message catalogs")?;

  let content =
    Arc::new(ContentStore::load(&config.resolve(&config.content.path), &config.i18n.default)?);
  let templates = Templates::load(&config.resolve(&config.content.templates_dir))?;

  let mut server = SiteServer::new(i18n)
    .toast_provider((&config.toast).into())
    .image_policy(config.images.clone());
  if let Some(layout) = &templates.layout {
    let document = Document::new(layout)
      .context("failed to parse layout.html")?
      .link("home", "")
      .link("gallery", "/gallery")
      .link("publications", "/publications")
      .link("admin", "/admin");
    server = server.layout(document);
  }
  if let Some(chat) = &config.chat {
    server = server.chat_widget(chat.clone());
  }
  Ok(pages::register(server, &content, &templates))
}

/// The full HTTP app: pages, robots.txt, static files and request tracing.
pub fn build_router(config: &SiteConfig) -> Result<Router> {
  let static_dir = config.resolve(&config.server.static_dir);
  let router = build_site(config)?
    .into_axum_router()?
    .nest_service("/static", ServeDir::new(static_dir))
    .layer(TraceLayer::new_for_http());
  Ok(router)
}

#[cfg(test)]
mod tests {
  use std::path::Path;

  use axum::body::Body;
  use axum::http::{Request, StatusCode, header};
  use http_body_util::BodyExt;
  use tower::ServiceExt;

  use super::*;
  use crate::config::load_site_config;

  fn shipped_config() -> SiteConfig {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("site.toml");
    load_site_config(&path).expect("shipped site.toml loads")
  }

  async fn get(router: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let mut req = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
      req = req.header(header::COOKIE, cookie);
    }
    let resp =
      router.clone().oneshot(req.body(Body::empty()).expect("request")).await.expect("response");
    let status = resp.status();
    let bytes = resp.into_body().collect().await.expect("body").to_bytes();
    (status, String::from_utf8_lossy(&bytes).into_owned())
  }

  #[tokio::test]
  async fn every_route_renders_in_every_locale() {
    let config = shipped_config();
    let router = build_router(&config).expect("router");
    for locale in &config.i18n.locales {
      for path in [
        "",
        "/gallery",
        "/publications",
        "/publications/pub-1",
        "/admin",
        "/admin/menus",
        "/admin/media",
        "/admin/media/pub-1",
        "/admin/details",
      ] {
        let uri = format!("/{locale}{path}");
        let (status, body) = get(&router, &uri, None).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {body}");
        assert!(body.contains(&format!(r#"lang="{locale}""#)), "{uri}");
      }
    }
  }

  #[tokio::test]
  async fn admin_titles_join_section_and_page() {
    let config = shipped_config();
    let router = build_router(&config).expect("router");
    let (_, body) = get(&router, "/en/admin/menus", None).await;
    assert!(body.contains("<title>Admin Panel | Menus</title>"), "{body}");
    let (_, body) = get(&router, "/en/admin", None).await;
    assert!(body.contains("<title>Admin Panel | Dashboard</title>"), "{body}");
  }

  #[tokio::test]
  async fn publication_tab_cookie_selects_list() {
    let config = shipped_config();
    let router = build_router(&config).expect("router");
    let (_, news) = get(&router, "/en/publications", None).await;
    let (_, video) = get(&router, "/en/publications", Some("publication-tab=video")).await;
    let (_, bogus) = get(&router, "/en/publications", Some("publication-tab=VIDEO")).await;
    assert!(news.contains(r#"class="tab active" data-tab="news""#), "{news}");
    assert!(video.contains(r#"class="tab active" data-tab="video""#), "{video}");
    assert_eq!(bogus, news);
  }

  #[tokio::test]
  async fn unknown_public_item_is_404_but_admin_item_warns() {
    let config = shipped_config();
    let router = build_router(&config).expect("router");
    let (status, _) = get(&router, "/uz/publications/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = get(&router, "/en/admin/media/nope", Some("admin-publication-tab=video")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#""severity":"warning""#), "{body}");
    assert!(body.contains(r#"class="tab active" data-tab="news""#), "{body}");
  }

  #[tokio::test]
  async fn robots_and_chat_widget() {
    let config = shipped_config();
    let router = build_router(&config).expect("router");
    let (status, body) = get(&router, "/robots.txt", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, saminvest_server::robots::ROBOTS_TXT);
    let (_, home) = get(&router, "/ru", None).await;
    assert!(home.contains(r#"id="chat-widget""#));
  }
}
