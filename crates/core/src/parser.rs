//! Recursive-descent parser from the token stream to the element tree.
//!
//! Enforces the single-root rule and tag balance; rejects capitalized
//! tag names because they denote component references the renderer has
//! no way to resolve.

use crate::ast::{Attr, AttrValue, Node};
use crate::error::MarkupError;
use crate::lexer::{lex, Spanned, Token};

/// Elements that never take children and may appear unclosed.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

/// Parse a markup fragment into its single root element.
pub fn parse_fragment(src: &str) -> Result<Node, MarkupError> {
    let tokens = lex(src)?;
    let mut parser = Parser::new(&tokens);
    parser.parse_root()
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn cur(&self) -> &Spanned {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn peek(&self) -> &Token {
        &self.cur().token
    }

    fn cur_line(&self) -> u32 {
        self.cur().line
    }

    fn advance(&mut self) -> &Spanned {
        let t = &self.tokens[self.pos.min(self.tokens.len() - 1)];
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        t
    }

    fn err(&self, msg: impl Into<String>) -> MarkupError {
        MarkupError::parse(self.cur_line(), msg)
    }

    fn take_ident(&mut self) -> Result<String, MarkupError> {
        if let Token::Ident(name) = self.peek().clone() {
            self.advance();
            Ok(name)
        } else {
            Err(self.err(format!("expected a name, got {:?}", self.peek())))
        }
    }

    // -- Root ---------------------------------------------------

    /// Parse exactly one root element. Stray top-level text and a second
    /// root element are both rejected.
    fn parse_root(&mut self) -> Result<Node, MarkupError> {
        let mut root: Option<Node> = None;

        loop {
            match self.peek().clone() {
                Token::Eof => break,
                Token::LAngle => {
                    if root.is_some() {
                        return Err(self.err("multiple root elements; expected exactly one"));
                    }
                    root = Some(self.parse_element()?);
                }
                Token::Text(t) => {
                    return Err(self.err(format!(
                        "unexpected text outside a root element: '{}'",
                        truncate(t.trim())
                    )));
                }
                Token::Expr(_) => {
                    // Top-level {expr} cannot be rendered on its own.
                    return Err(self.err("expected an element, got an expression"));
                }
                other => {
                    return Err(self.err(format!("expected an element, got {:?}", other)));
                }
            }
        }

        root.ok_or_else(|| self.err("expected an element, found none"))
    }

    // -- Elements -----------------------------------------------

    fn parse_element(&mut self) -> Result<Node, MarkupError> {
        // caller has seen LAngle
        self.advance();
        let tag_line = self.cur_line();
        let tag = self.take_ident()?;

        if tag.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
            return Err(MarkupError::parse(
                tag_line,
                format!("unknown component reference '<{}>'", tag),
            ));
        }

        let attrs = self.parse_attrs()?;

        // Self-closing
        if self.peek() == &Token::SlashRAngle {
            self.advance();
            return Ok(Node::Element {
                tag,
                attrs,
                children: Vec::new(),
            });
        }

        if self.peek() != &Token::RAngle {
            return Err(self.err(format!("expected '>' or '/>', got {:?}", self.peek())));
        }
        self.advance();

        // Void elements take no children and need no closing tag.
        if is_void_tag(&tag) {
            return Ok(Node::Element {
                tag,
                attrs,
                children: Vec::new(),
            });
        }

        let children = self.parse_children(&tag, tag_line)?;
        Ok(Node::Element {
            tag,
            attrs,
            children,
        })
    }

    fn parse_attrs(&mut self) -> Result<Vec<Attr>, MarkupError> {
        let mut attrs = Vec::new();
        loop {
            match self.peek().clone() {
                Token::Ident(name) => {
                    self.advance();
                    let value = if self.peek() == &Token::Eq {
                        self.advance();
                        match self.peek().clone() {
                            Token::Str(s) => {
                                self.advance();
                                AttrValue::Str(s)
                            }
                            Token::Expr(e) => {
                                self.advance();
                                AttrValue::Expr(e)
                            }
                            other => {
                                return Err(self.err(format!(
                                    "expected attribute value after '{}=', got {:?}",
                                    name, other
                                )))
                            }
                        }
                    } else {
                        AttrValue::Empty
                    };
                    attrs.push(Attr { name, value });
                }
                // JSX spread ({...props}) -- nothing to resolve it against,
                // dropped as best-effort.
                Token::Expr(_) => {
                    self.advance();
                }
                _ => break,
            }
        }
        Ok(attrs)
    }

    fn parse_children(&mut self, tag: &str, tag_line: u32) -> Result<Vec<Node>, MarkupError> {
        let mut children = Vec::new();
        loop {
            match self.peek().clone() {
                Token::Text(t) => {
                    self.advance();
                    children.push(Node::Text(t));
                }
                Token::Expr(e) => {
                    self.advance();
                    children.push(Node::Expr(e));
                }
                Token::LAngle => {
                    children.push(self.parse_element()?);
                }
                Token::LAngleSlash => {
                    self.advance();
                    let close_line = self.cur_line();
                    let close = self.take_ident()?;
                    if close != tag {
                        return Err(MarkupError::parse(
                            close_line,
                            format!("mismatched closing tag </{}>, expected </{}>", close, tag),
                        ));
                    }
                    if self.peek() != &Token::RAngle {
                        return Err(self.err(format!(
                            "expected '>' after '</{}', got {:?}",
                            close,
                            self.peek()
                        )));
                    }
                    self.advance();
                    return Ok(children);
                }
                Token::Eof => {
                    return Err(MarkupError::parse(
                        tag_line,
                        format!("unexpected end of input, unclosed <{}>", tag),
                    ));
                }
                other => {
                    return Err(self.err(format!("unexpected {:?} inside <{}>", other, tag)));
                }
            }
        }
    }
}

fn truncate(s: &str) -> String {
    const MAX: usize = 40;
    if s.chars().count() <= MAX {
        s.to_string()
    } else {
        let head: String = s.chars().take(MAX).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_root_with_attrs_and_children() {
        let node = parse_fragment("<div className=\"p-4\"><h1>Hi</h1></div>").unwrap();
        let Node::Element {
            tag,
            attrs,
            children,
        } = node
        else {
            panic!("expected element");
        };
        assert_eq!(tag, "div");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "className");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag(), Some("h1"));
    }

    #[test]
    fn mismatched_closing_tag_is_an_error() {
        let err = parse_fragment("<div><span></div>").unwrap_err();
        assert!(
            err.message.contains("mismatched closing tag"),
            "got: {}",
            err.message
        );
    }

    #[test]
    fn multiple_roots_are_an_error() {
        let err = parse_fragment("<div>a</div><div>b</div>").unwrap_err();
        assert!(err.message.contains("multiple root elements"));
    }

    #[test]
    fn unclosed_root_is_an_error() {
        let err = parse_fragment("<div><p>text</p>").unwrap_err();
        assert!(err.message.contains("unclosed <div>"));
    }

    #[test]
    fn capitalized_tag_is_an_unknown_reference() {
        let err = parse_fragment("<Card title=\"x\"/>").unwrap_err();
        assert!(err.message.contains("unknown component reference '<Card>'"));
    }

    #[test]
    fn void_tags_need_no_closing() {
        let node = parse_fragment("<div><img src=\"a.png\"><br></div>").unwrap();
        let Node::Element { children, .. } = node else {
            panic!("expected element");
        };
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn bare_boolean_attribute() {
        let node = parse_fragment("<input type=\"checkbox\" checked/>").unwrap();
        let Node::Element { attrs, .. } = node else {
            panic!("expected element");
        };
        assert_eq!(attrs[1].name, "checked");
        assert_eq!(attrs[1].value, AttrValue::Empty);
    }

    #[test]
    fn spread_attribute_is_dropped() {
        let node = parse_fragment("<div {...props} id=\"x\"/>").unwrap();
        let Node::Element { attrs, .. } = node else {
            panic!("expected element");
        };
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "id");
    }

    #[test]
    fn expression_children_are_captured_raw() {
        let node = parse_fragment("<div>{count}</div>").unwrap();
        let Node::Element { children, .. } = node else {
            panic!("expected element");
        };
        assert_eq!(children[0], Node::Expr("count".into()));
    }

    #[test]
    fn plain_prose_is_rejected() {
        let err = parse_fragment("Sorry, I cannot generate that UI.").unwrap_err();
        assert!(err.message.contains("outside a root element"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let err = parse_fragment("").unwrap_err();
        assert!(err.message.contains("found none"));
    }
}
