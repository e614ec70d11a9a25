//! Sanitizing renderer: element tree to displayable HTML.
//!
//! The markup comes from a language model and is untrusted. Rendering
//! never evaluates it as code: the parsed tree is interpreted through a
//! tag/attribute allow-list and emitted as escaped HTML. Disallowed
//! elements are dropped with their subtrees; expression values are
//! dropped at emission.

use serde::{Deserialize, Serialize};

use crate::ast::{AttrValue, Node};
use crate::parser::{is_void_tag, parse_fragment};

/// The result of one render attempt. Exactly one outcome is current per
/// preview slot; a new attempt replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RenderOutcome {
    Rendered { html: String },
    Failed { message: String },
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

/// Render a markup fragment to sanitized HTML.
///
/// Empty input is the no-op fallback and renders to empty HTML. Parse
/// failures become [`RenderOutcome::Failed`] with the parse error text;
/// this function never panics and never returns an `Err`.
pub fn render(markup: &str) -> RenderOutcome {
    if markup.trim().is_empty() {
        return RenderOutcome::Rendered {
            html: String::new(),
        };
    }

    match parse_fragment(markup) {
        Ok(node) => {
            let mut html = String::new();
            emit_node(&node, &mut html);
            RenderOutcome::Rendered { html }
        }
        Err(e) => RenderOutcome::Failed {
            message: e.to_string(),
        },
    }
}

// ──────────────────────────────────────────────
// Allow-lists
// ──────────────────────────────────────────────

const ALLOWED_TAGS: &[&str] = &[
    "a",
    "article",
    "aside",
    "blockquote",
    "br",
    "button",
    "code",
    "div",
    "em",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "img",
    "input",
    "label",
    "li",
    "main",
    "nav",
    "ol",
    "option",
    "p",
    "pre",
    "section",
    "select",
    "small",
    "span",
    "strong",
    "table",
    "tbody",
    "td",
    "textarea",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
];

const ALLOWED_ATTRS: &[&str] = &[
    "alt",
    "checked",
    "class",
    "cols",
    "disabled",
    "for",
    "height",
    "href",
    "id",
    "name",
    "placeholder",
    "rel",
    "role",
    "rows",
    "src",
    "style",
    "target",
    "title",
    "type",
    "value",
    "width",
];

/// Attributes whose values are URLs and must not carry a script scheme.
const URL_ATTRS: &[&str] = &["href", "src"];

fn allowed_tag(tag: &str) -> bool {
    ALLOWED_TAGS.contains(&tag)
}

/// Map JSX attribute spellings to their HTML names, then check the
/// allow-list. `aria-*` and `data-*` always pass.
fn html_attr_name(name: &str) -> Option<&str> {
    let mapped = match name {
        "className" => "class",
        "htmlFor" => "for",
        other => other,
    };
    if mapped.starts_with("aria-") || mapped.starts_with("data-") {
        return Some(mapped);
    }
    if ALLOWED_ATTRS.contains(&mapped) {
        Some(mapped)
    } else {
        None
    }
}

fn safe_url(value: &str) -> bool {
    let v = value.trim().to_ascii_lowercase();
    !v.starts_with("javascript:") && !v.starts_with("vbscript:")
}

// ──────────────────────────────────────────────
// Emission
// ──────────────────────────────────────────────

fn emit_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(&escape_text(t)),
        // Expressions cannot be evaluated; dropped.
        Node::Expr(_) => {}
        Node::Element {
            tag,
            attrs,
            children,
        } => {
            if !allowed_tag(tag) {
                // Disallowed element: drop the whole subtree.
                return;
            }

            out.push('<');
            out.push_str(tag);
            for attr in attrs {
                let Some(name) = html_attr_name(&attr.name) else {
                    continue;
                };
                match &attr.value {
                    AttrValue::Str(v) => {
                        if URL_ATTRS.contains(&name) && !safe_url(v) {
                            continue;
                        }
                        out.push(' ');
                        out.push_str(name);
                        out.push_str("=\"");
                        out.push_str(&escape_attr(v));
                        out.push('"');
                    }
                    AttrValue::Empty => {
                        out.push(' ');
                        out.push_str(name);
                    }
                    // Expression values are never evaluated; dropped.
                    AttrValue::Expr(_) => {}
                }
            }

            if is_void_tag(tag) {
                out.push_str(" />");
                return;
            }
            out.push('>');
            for child in children {
                emit_node(child, out);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
