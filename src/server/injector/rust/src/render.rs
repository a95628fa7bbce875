/* src/server/injector/rust/src/render.rs */

use serde_json::Value;

use crate::helpers::{escape_html, is_boolean_attr, is_truthy, lookup, to_text};
use crate::syntax::Node;

/// Lookup scope: the root data plus the current and enclosing `each` items.
#[derive(Clone, Copy)]
struct Scope<'a> {
  root: &'a Value,
  item: Option<&'a Value>,
  outer: Option<&'a Value>,
}

impl<'a> Scope<'a> {
  fn get(&self, path: &str) -> Option<&'a Value> {
    let (base, rest) = if let Some(rest) = path.strip_prefix("$$") {
      (self.outer?, rest)
    } else if let Some(rest) = path.strip_prefix('$') {
      (self.item?, rest)
    } else {
      return lookup(path, self.root);
    };
    match rest.strip_prefix('.') {
      Some(tail) => lookup(tail, base),
      None if rest.is_empty() => Some(base),
      None => None,
    }
  }

  fn enter(self, item: &'a Value) -> Self {
    Self { root: self.root, item: Some(item), outer: self.item }
  }
}

pub(crate) struct Renderer {
  out: String,
  pending_attrs: Vec<(String, String)>,
}

impl Renderer {
  pub(crate) fn new(capacity: usize) -> Self {
    Self { out: String::with_capacity(capacity), pending_attrs: Vec::new() }
  }

  pub(crate) fn finish(self) -> String {
    self.out
  }

  pub(crate) fn render(&mut self, nodes: &[Node], data: &Value) {
    self.nodes(nodes, Scope { root: data, item: None, outer: None });
  }

  fn nodes(&mut self, nodes: &[Node], scope: Scope<'_>) {
    for node in nodes {
      match node {
        Node::Text(text) => self.text(text),
        Node::Slot(path) => {
          let value = scope.get(path).map(to_text).unwrap_or_default();
          self.out.push_str(&escape_html(&value));
        }
        Node::Html(path) => {
          self.out.push_str(&scope.get(path).map(to_text).unwrap_or_default());
        }
        Node::Attr { path, name } => {
          let Some(value) = scope.get(path) else { continue };
          if is_boolean_attr(name) {
            if is_truthy(value) {
              self.pending_attrs.push((name.clone(), String::new()));
            }
          } else {
            self.pending_attrs.push((name.clone(), escape_html(&to_text(value))));
          }
        }
        Node::If { path, then_nodes, else_nodes } => {
          let branch = if scope.get(path).is_some_and(is_truthy) { then_nodes } else { else_nodes };
          self.nodes(branch, scope);
        }
        Node::Each { path, body } => {
          if let Some(Value::Array(items)) = scope.get(path) {
            for item in items {
              self.nodes(body, scope.enter(item));
            }
          }
        }
        Node::Match { path, arms } => {
          let key = scope.get(path).map(to_text).unwrap_or_default();
          if let Some((_, body)) = arms.iter().find(|(value, _)| *value == key) {
            self.nodes(body, scope);
          }
        }
      }
    }
  }

  /// Emit literal text, splicing pending attributes into its first opening tag.
  fn text(&mut self, text: &str) {
    if self.pending_attrs.is_empty() {
      self.out.push_str(text);
      return;
    }
    let Some(name_end) = opening_tag_name_end(text) else {
      self.out.push_str(text);
      return;
    };
    self.out.push_str(&text[..name_end]);
    for (name, value) in self.pending_attrs.drain(..) {
      self.out.push_str(&format!(r#" {name}="{value}""#));
    }
    self.out.push_str(&text[name_end..]);
  }
}

/// Byte offset just past the tag name of the first opening tag in `text`.
fn opening_tag_name_end(text: &str) -> Option<usize> {
  let bytes = text.as_bytes();
  let mut search = 0;
  while let Some(rel) = text[search..].find('<') {
    let start = search + rel + 1;
    if bytes.get(start).is_some_and(u8::is_ascii_alphabetic) {
      let len = bytes[start..]
        .iter()
        .position(|b| matches!(b, b' ' | b'>' | b'/' | b'\n' | b'\t' | b'\r'))
        .unwrap_or(bytes.len() - start);
      return Some(start + len);
    }
    search = start;
  }
  None
}
