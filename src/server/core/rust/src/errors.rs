/* src/server/core/rust/src/errors.rs */

#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct SiteError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "VALIDATION_ERROR" => 400,
    "NOT_FOUND" => 404,
    "TEMPLATE_ERROR" | "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl SiteError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn validation(msg: impl Into<String>) -> Self {
    Self::with_code("VALIDATION_ERROR", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }
}

impl From<saminvest_injector::TemplateError> for SiteError {
  fn from(err: saminvest_injector::TemplateError) -> Self {
    Self::with_code("TEMPLATE_ERROR", err.to_string())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_status_known_codes() {
    assert_eq!(default_status("VALIDATION_ERROR"), 400);
    assert_eq!(default_status("NOT_FOUND"), 404);
    assert_eq!(default_status("TEMPLATE_ERROR"), 500);
    assert_eq!(default_status("INTERNAL_ERROR"), 500);
  }

  #[test]
  fn unknown_code_is_500() {
    assert_eq!(SiteError::with_code("CUSTOM", "x").status(), 500);
  }

  #[test]
  fn explicit_status_kept() {
    let err = SiteError::new("GONE", "moved away", 410);
    assert_eq!(err.code(), "GONE");
    assert_eq!(err.message(), "moved away");
    assert_eq!(err.status(), 410);
  }

  #[test]
  fn template_errors_convert() {
    let err: SiteError = saminvest_injector::TemplateError::Unclosed("each:xs".into()).into();
    assert_eq!(err.code(), "TEMPLATE_ERROR");
    assert_eq!(err.status(), 500);
  }

  #[test]
  fn display_format() {
    assert_eq!(SiteError::not_found("missing").to_string(), "NOT_FOUND: missing");
  }
}
