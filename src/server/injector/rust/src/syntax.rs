/* src/server/injector/rust/src/syntax.rs */

use crate::TemplateError;

pub(crate) const MARKER_OPEN: &str = "<!--sam:";
pub(crate) const MARKER_CLOSE: &str = "-->";

#[derive(Debug, PartialEq)]
pub(crate) enum Node {
  Text(String),
  /// Escaped text slot.
  Slot(String),
  /// Raw HTML slot.
  Html(String),
  /// Attribute applied to the next opening tag.
  Attr { path: String, name: String },
  If { path: String, then_nodes: Vec<Node>, else_nodes: Vec<Node> },
  Each { path: String, body: Vec<Node> },
  Match { path: String, arms: Vec<(String, Vec<Node>)> },
}

#[derive(Debug)]
enum Piece<'a> {
  Text(&'a str),
  Marker(&'a str),
}

fn split_markers(source: &str) -> Vec<Piece<'_>> {
  let mut pieces = Vec::new();
  let mut rest = source;

  while !rest.is_empty() {
    let Some(open) = rest.find(MARKER_OPEN) else {
      pieces.push(Piece::Text(rest));
      break;
    };
    if open > 0 {
      pieces.push(Piece::Text(&rest[..open]));
    }
    let body_start = open + MARKER_OPEN.len();
    match rest[body_start..].find(MARKER_CLOSE) {
      Some(close) => {
        pieces.push(Piece::Marker(&rest[body_start..body_start + close]));
        rest = &rest[body_start + close + MARKER_CLOSE.len()..];
      }
      None => {
        // Unterminated marker stays literal
        pieces.push(Piece::Text(&rest[open..]));
        break;
      }
    }
  }

  pieces
}

/// What ended a nested block.
enum Stop {
  End,
  Else,
  When(String),
}

struct Parser<'a> {
  pieces: Vec<Piece<'a>>,
  pos: usize,
}

impl<'a> Parser<'a> {
  fn next(&mut self) -> Option<&Piece<'a>> {
    let piece = self.pieces.get(self.pos);
    self.pos += 1;
    piece
  }

  /// Parse nodes until a marker accepted by `stop` or end of input.
  /// Returns `None` as the stop when input ran out.
  fn block(
    &mut self,
    stop: &dyn Fn(&str) -> Option<Stop>,
  ) -> Result<(Vec<Node>, Option<Stop>), TemplateError> {
    let mut nodes = Vec::new();

    while let Some(piece) = self.next() {
      let directive = match piece {
        Piece::Text(text) => {
          nodes.push(Node::Text((*text).to_string()));
          continue;
        }
        Piece::Marker(d) => *d,
      };

      if let Some(found) = stop(directive) {
        return Ok((nodes, Some(found)));
      }
      nodes.push(self.directive(directive)?);
    }

    Ok((nodes, None))
  }

  fn directive(&mut self, directive: &str) -> Result<Node, TemplateError> {
    if let Some(path) = directive.strip_prefix("if:") {
      let end_tag = format!("endif:{path}");
      let (then_nodes, stop) = self.block(&|d| {
        if d == end_tag {
          Some(Stop::End)
        } else if d == "else" {
          Some(Stop::Else)
        } else {
          None
        }
      })?;
      let else_nodes = match stop {
        Some(Stop::End) => Vec::new(),
        Some(Stop::Else) => {
          let (nodes, stop) = self.block(&|d| (d == end_tag).then_some(Stop::End))?;
          if stop.is_none() {
            return Err(TemplateError::Unclosed(format!("if:{path}")));
          }
          nodes
        }
        _ => return Err(TemplateError::Unclosed(format!("if:{path}"))),
      };
      return Ok(Node::If { path: path.to_string(), then_nodes, else_nodes });
    }

    if let Some(path) = directive.strip_prefix("each:") {
      let (body, stop) = self.block(&|d| (d == "endeach").then_some(Stop::End))?;
      if stop.is_none() {
        return Err(TemplateError::Unclosed(format!("each:{path}")));
      }
      return Ok(Node::Each { path: path.to_string(), body });
    }

    if let Some(path) = directive.strip_prefix("match:") {
      return self.match_arms(path);
    }

    if let Some((path, name)) = directive.split_once(":attr:") {
      return Ok(Node::Attr { path: path.to_string(), name: name.to_string() });
    }

    if let Some(path) = directive.strip_suffix(":html") {
      return Ok(Node::Html(path.to_string()));
    }

    Ok(Node::Slot(directive.to_string()))
  }

  fn match_arms(&mut self, path: &str) -> Result<Node, TemplateError> {
    let arm_stop = |d: &str| {
      if d == "endmatch" {
        Some(Stop::End)
      } else {
        d.strip_prefix("when:").map(|v| Stop::When(v.to_string()))
      }
    };

    // Anything before the first `when` is discarded
    let (_, mut stop) = self.block(&arm_stop)?;
    let mut arms = Vec::new();
    loop {
      match stop {
        Some(Stop::When(value)) => {
          let (body, next) = self.block(&arm_stop)?;
          arms.push((value, body));
          stop = next;
        }
        Some(Stop::End) => break,
        _ => return Err(TemplateError::Unclosed(format!("match:{path}"))),
      }
    }
    Ok(Node::Match { path: path.to_string(), arms })
  }
}

pub(crate) fn parse(source: &str) -> Result<Vec<Node>, TemplateError> {
  let mut parser = Parser { pieces: split_markers(source), pos: 0 };
  let (nodes, stop) = parser.block(&|d| match d {
    "else" | "endeach" | "endmatch" => Some(Stop::End),
    _ if d.starts_with("endif:") || d.starts_with("when:") => Some(Stop::End),
    _ => None,
  })?;
  match stop {
    None => Ok(nodes),
    Some(_) => Err(TemplateError::Stray(parser.stray_marker())),
  }
}

impl Parser<'_> {
  fn stray_marker(&self) -> String {
    match self.pieces.get(self.pos.saturating_sub(1)) {
      Some(Piece::Marker(d)) => (*d).to_string(),
      _ => String::new(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_text_is_one_node() {
    assert_eq!(parse("<p>hi</p>").ok(), Some(vec![Node::Text("<p>hi</p>".into())]));
  }

  #[test]
  fn empty_template() {
    assert_eq!(parse("").ok(), Some(vec![]));
  }

  #[test]
  fn unterminated_marker_is_text() {
    assert_eq!(parse("a<!--sam:x").ok(), Some(vec![Node::Text("a".into()), Node::Text("<!--sam:x".into())]));
  }

  #[test]
  fn slot_kinds() {
    let nodes = parse("<!--sam:a--><!--sam:b:html--><!--sam:c:attr:href-->").ok();
    assert_eq!(
      nodes,
      Some(vec![
        Node::Slot("a".into()),
        Node::Html("b".into()),
        Node::Attr { path: "c".into(), name: "href".into() },
      ])
    );
  }

  #[test]
  fn if_else_block() {
    let nodes = parse("<!--sam:if:x-->yes<!--sam:else-->no<!--sam:endif:x-->").ok();
    assert_eq!(
      nodes,
      Some(vec![Node::If {
        path: "x".into(),
        then_nodes: vec![Node::Text("yes".into())],
        else_nodes: vec![Node::Text("no".into())],
      }])
    );
  }

  #[test]
  fn nested_if_with_distinct_paths() {
    let src = "<!--sam:if:a--><!--sam:if:b-->ab<!--sam:endif:b--><!--sam:endif:a-->";
    let nodes = parse(src).unwrap();
    assert_eq!(nodes.len(), 1);
  }

  #[test]
  fn match_arms_collected() {
    let src = "<!--sam:match:tab--><!--sam:when:news-->N<!--sam:when:photo-->P<!--sam:endmatch-->";
    let nodes = parse(src).unwrap();
    let Node::Match { arms, .. } = &nodes[0] else { panic!("expected match") };
    assert_eq!(arms.len(), 2);
    assert_eq!(arms[1].0, "photo");
  }

  #[test]
  fn unclosed_each_is_error() {
    assert!(matches!(parse("<!--sam:each:xs-->x"), Err(TemplateError::Unclosed(_))));
  }

  #[test]
  fn stray_end_is_error() {
    assert!(matches!(parse("x<!--sam:endeach-->"), Err(TemplateError::Stray(d)) if d == "endeach"));
  }
}
