/* src/server/core/rust/src/escape.rs */

/// Make serialized JSON safe to embed inside a `<script>` element.
///
/// `<`, `>` and `&` become `\u003c`, `\u003e`, `\u0026` so the text can never
/// close the element or open a comment; U+2028/U+2029 are escaped because some
/// parsers treat them as line terminators. All replacements are valid JSON
/// escapes, so the payload parses to the same value.
pub fn escape_script_json(json: &str) -> String {
  let mut out = String::with_capacity(json.len());
  for ch in json.chars() {
    match ch {
      '<' => out.push_str("\\u003c"),
      '>' => out.push_str("\\u003e"),
      '&' => out.push_str("\\u0026"),
      '\u{2028}' => out.push_str("\\u2028"),
      '\u{2029}' => out.push_str("\\u2029"),
      c => out.push(c),
    }
  }
  out
}
