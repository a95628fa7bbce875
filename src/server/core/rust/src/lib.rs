/* src/server/core/rust/src/lib.rs */

pub mod cookie;
pub mod document;
pub mod errors;
pub mod escape;
pub mod i18n;
pub mod metadata;
pub mod notify;
pub mod page;
pub mod params;
pub mod robots;
pub mod server;
pub mod tab;
pub mod widgets;

// Re-exports for ergonomic use
pub use cookie::CookieStore;
pub use document::{Document, DocumentParts};
pub use errors::SiteError;
pub use escape::escape_script_json;
pub use i18n::{
  I18nConfig, ResolveData, ResolveStrategy, Translator, default_strategies, from_accept_language,
  from_cookie, from_url_prefix, load_i18n_config, resolve_chain,
};
pub use metadata::PageMetadata;
pub use notify::{NotificationSink, Notifier, Severity, Toast, ToastBuffer, ToastOptions, ToastProvider};
pub use page::{Component, PageDef, PageRequest, RenderedPage, View};
pub use params::RouteParams;
pub use server::{SiteParts, SiteServer};
pub use tab::{ADMIN_PUBLICATION_TAB, PUBLICATION_TAB, TabHint, TabSet, read_tab};
pub use widgets::{ChatWidget, ImagePolicy, RemotePattern};
