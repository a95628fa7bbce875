/* src/server/injector/rust/src/lib.rs */

//! Comment-marker HTML templates.
//!
//! Templates are plain HTML with `<!--sam:...-->` directives: text slots, raw
//! HTML slots, attributes, `if`/`else`, `each` and `match` blocks. A template
//! is parsed once and rendered against any number of JSON values.

mod helpers;
mod render;
mod syntax;

use serde_json::Value;

pub use helpers::escape_html;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
  #[error("unclosed block <!--sam:{0}-->")]
  Unclosed(String),
  #[error("unexpected <!--sam:{0}--> outside of a block")]
  Stray(String),
}

/// A parsed template, safe to share across requests.
#[derive(Debug)]
pub struct Template {
  nodes: Vec<syntax::Node>,
  size_hint: usize,
}

impl Template {
  pub fn parse(source: &str) -> Result<Self, TemplateError> {
    Ok(Self { nodes: syntax::parse(source)?, size_hint: source.len() })
  }

  pub fn render(&self, data: &Value) -> String {
    let mut renderer = render::Renderer::new(self.size_hint);
    renderer.render(&self.nodes, data);
    renderer.finish()
  }
}

/// Parse and render in one step.
pub fn inject(source: &str, data: &Value) -> Result<String, TemplateError> {
  Template::parse(source).map(|t| t.render(data))
}
