/* src/server/core/rust/src/server.rs */

use crate::document::{DEFAULT_LAYOUT, Document};
use crate::errors::SiteError;
use crate::i18n::{I18nConfig, ResolveStrategy};
use crate::notify::ToastProvider;
use crate::page::PageDef;
use crate::widgets::{ChatWidget, ImagePolicy};

/// Framework-agnostic parts extracted from `SiteServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct SiteParts {
  pub pages: Vec<PageDef>,
  pub i18n_config: I18nConfig,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub document: Document,
  pub toast_provider: ToastProvider,
  pub chat_widget: Option<ChatWidget>,
  pub image_policy: ImagePolicy,
}

pub struct SiteServer {
  pages: Vec<PageDef>,
  i18n_config: I18nConfig,
  strategies: Vec<Box<dyn ResolveStrategy>>,
  document: Option<Document>,
  toast_provider: ToastProvider,
  chat_widget: Option<ChatWidget>,
  image_policy: ImagePolicy,
}

impl SiteServer {
  /// Every site is localized, so the catalogs are required up front.
  pub fn new(i18n_config: I18nConfig) -> Self {
    Self {
      pages: Vec::new(),
      i18n_config,
      strategies: Vec::new(),
      document: None,
      toast_provider: ToastProvider::default(),
      chat_widget: None,
      image_policy: ImagePolicy::default(),
    }
  }

  pub fn page(mut self, page: PageDef) -> Self {
    self.pages.push(page);
    self
  }

  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  pub fn layout(mut self, document: Document) -> Self {
    self.document = Some(document);
    self
  }

  pub fn toast_provider(mut self, provider: ToastProvider) -> Self {
    self.toast_provider = provider;
    self
  }

  pub fn chat_widget(mut self, widget: ChatWidget) -> Self {
    self.chat_widget = Some(widget);
    self
  }

  pub fn image_policy(mut self, policy: ImagePolicy) -> Self {
    self.image_policy = policy;
    self
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> Result<SiteParts, SiteError> {
    let strategies = if self.strategies.is_empty() {
      crate::i18n::default_strategies()
    } else {
      self.strategies
    };
    let document = match self.document {
      Some(doc) => doc,
      None => Document::new(DEFAULT_LAYOUT)?,
    };
    Ok(SiteParts {
      pages: self.pages,
      i18n_config: self.i18n_config,
      strategies,
      document,
      toast_provider: self.toast_provider,
      chat_widget: self.chat_widget,
      image_policy: self.image_policy,
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn i18n() -> I18nConfig {
    I18nConfig::new(vec!["uz".into()], "uz", HashMap::new())
  }

  #[test]
  fn defaults_filled_in() {
    let parts = SiteServer::new(i18n()).into_parts().unwrap();
    assert!(parts.pages.is_empty());
    assert_eq!(parts.strategies.len(), 3);
    assert_eq!(parts.toast_provider.auto_close_ms, 5000);
    assert!(parts.chat_widget.is_none());
    assert_eq!(parts.image_policy, ImagePolicy::default());
  }

  #[test]
  fn builtin_layout_used_without_one() {
    let parts = SiteServer::new(i18n()).into_parts().unwrap();
    let t = parts.i18n_config.translator("uz");
    let html = parts.document.render(&crate::document::DocumentParts {
      t: &t,
      path_rest: "",
      locales: &parts.i18n_config.locales,
      metadata: None,
      body: "<main>x</main>",
      toasts: &[],
      provider: &parts.toast_provider,
      widget: None,
    });
    assert!(html.contains(r#"<html lang="uz">"#), "{html}");
    assert!(html.contains("<main>x</main>"));
  }

  #[test]
  fn builder_collects_pages_in_order() {
    let echo = |_: &crate::page::View<'_>| -> Result<String, crate::SiteError> { Ok(String::new()) };
    let parts = SiteServer::new(i18n())
      .page(PageDef::new("/gallery", echo))
      .page(PageDef::new("/admin", echo))
      .into_parts()
      .unwrap();
    let routes: Vec<&str> = parts.pages.iter().map(|p| p.route.as_str()).collect();
    assert_eq!(routes, ["/gallery", "/admin"]);
  }
}
