//! Scanning, tree building and rendering of arithmetic expressions.
//!
//! Source text is split into raw [`tokenizer::Lexeme`]s by a [`logos`] lexer, turned into typed
//! [`parser::token::Token`]s by the [`parser::Parser`], and reduced into a single
//! [`parser::ast::Node`] tree by the operator-precedence [`parser::build`] step.

pub mod parser;
pub mod tokenizer;

pub use parser::{parse, Parser};
