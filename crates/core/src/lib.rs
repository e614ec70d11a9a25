//! veneer-core: fragment extraction and markup rendering.
//!
//! Turns a raw model response into a displayable HTML preview in two
//! steps, both pure and synchronous:
//!
//! - [`extract_fragment()`] -- isolate the markup fragment from the
//!   surrounding prose, fences, and boilerplate of a model response
//! - [`render()`] -- lex, parse, and sanitize the fragment into a
//!   [`RenderOutcome`], never evaluating the text as code
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`RenderOutcome`] -- the Rendered/Failed result of one attempt
//! - [`MarkupError`] -- parse error with line information
//! - AST types: [`Node`], [`Attr`], [`AttrValue`]

pub mod ast;
pub mod error;
pub mod extract;
pub mod lexer;
pub mod parser;
pub mod render;

pub use ast::{Attr, AttrValue, Node};
pub use error::MarkupError;
pub use extract::extract_fragment;
pub use parser::parse_fragment;
pub use render::{render, RenderOutcome};
