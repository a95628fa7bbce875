/* src/server/injector/rust/src/helpers.rs */

use serde_json::Value;

/// Walk a dotted path (`a.b.0.c`) through objects and arrays.
pub(crate) fn lookup<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
  path.split('.').try_fold(data, |current, key| match current {
    Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
    other => other.get(key),
  })
}

pub(crate) fn is_truthy(value: &Value) -> bool {
  match value {
    Value::Null => false,
    Value::Bool(b) => *b,
    Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
    Value::String(s) => !s.is_empty(),
    Value::Array(items) => !items.is_empty(),
    Value::Object(_) => true,
  }
}

pub(crate) fn to_text(value: &Value) -> String {
  match value {
    Value::Null => String::new(),
    Value::String(s) => s.clone(),
    Value::Bool(b) => b.to_string(),
    Value::Number(n) => n.to_string(),
    other => other.to_string(),
  }
}

// Present-or-absent attributes; a truthy value renders `name=""`.
const BOOLEAN_ATTRS: &[&str] = &[
  "async", "autofocus", "checked", "defer", "disabled", "hidden", "multiple", "open", "readonly",
  "required", "selected",
];

pub(crate) fn is_boolean_attr(name: &str) -> bool {
  BOOLEAN_ATTRS.contains(&name)
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}
