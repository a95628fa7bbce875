/* src/server/core/rust/src/notify.rs */

// Transient notifications ("toasts"). The server collects them per request
// and hands them to the client-side toast script with the rendered page.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTO_CLOSE_MS: u64 = 5000;

/// Option key that overrides the provider's auto-close delay.
const AUTO_CLOSE_KEY: &str = "autoClose";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Success,
  Error,
  Warning,
}

/// Caller-supplied options, forwarded to the client unchanged.
pub type ToastOptions = serde_json::Map<String, serde_json::Value>;

/// Process-wide toast settings, configured once and passed to every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastProvider {
  pub auto_close_ms: u64,
  pub position: String,
}

impl Default for ToastProvider {
  fn default() -> Self {
    Self { auto_close_ms: DEFAULT_AUTO_CLOSE_MS, position: "top-right".to_string() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
  pub message: String,
  pub severity: Severity,
  pub auto_close_ms: u64,
  pub options: ToastOptions,
}

pub trait NotificationSink: Send + Sync {
  fn show(&self, toast: Toast);
}

/// Request-scoped sink; drained into the page once rendering finishes.
#[derive(Debug, Default)]
pub struct ToastBuffer {
  toasts: Mutex<Vec<Toast>>,
}

impl ToastBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn drain(&self) -> Vec<Toast> {
    match self.toasts.lock() {
      Ok(mut toasts) => std::mem::take(&mut *toasts),
      Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
    }
  }
}

impl NotificationSink for ToastBuffer {
  fn show(&self, toast: Toast) {
    tracing::debug!(severity = ?toast.severity, message = %toast.message, "toast queued");
    match self.toasts.lock() {
      Ok(mut toasts) => toasts.push(toast),
      Err(poisoned) => poisoned.into_inner().push(toast),
    }
  }
}

/// The notification hook: one wrapper per severity over a single sink.
#[derive(Clone)]
pub struct Notifier {
  provider: ToastProvider,
  sink: Arc<dyn NotificationSink>,
}

impl Notifier {
  pub fn new(provider: ToastProvider, sink: Arc<dyn NotificationSink>) -> Self {
    Self { provider, sink }
  }

  pub fn success(&self, message: impl Into<String>, options: ToastOptions) {
    self.notify(Severity::Success, message.into(), options);
  }

  pub fn error(&self, message: impl Into<String>, options: ToastOptions) {
    self.notify(Severity::Error, message.into(), options);
  }

  pub fn warning(&self, message: impl Into<String>, options: ToastOptions) {
    self.notify(Severity::Warning, message.into(), options);
  }

  fn notify(&self, severity: Severity, message: String, options: ToastOptions) {
    let auto_close_ms = options
      .get(AUTO_CLOSE_KEY)
      .and_then(serde_json::Value::as_u64)
      .unwrap_or(self.provider.auto_close_ms);
    self.sink.show(Toast { message, severity, auto_close_ms, options });
  }
}

impl std::fmt::Debug for Notifier {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Notifier").field("provider", &self.provider).finish_non_exhaustive()
  }
}
