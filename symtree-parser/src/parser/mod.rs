pub mod ast;
pub mod build;
pub mod error;
pub mod fmt;
pub mod token;

use ast::Node;
use error::{kind, Error};
use std::ops::Range;
use super::tokenizer::{tokenize_complete, Lexeme, LexemeKind};
use token::{Function, FunctionKind, Interner, Operator, Paren, Token};
use tracing::debug;

/// Turns source text into spanned [`Token`]s, and from there into a tree.
///
/// The parser decides whether each `+` and `-` is a binary or a prefix operator, and resolves
/// names into functions or interned variables; the arity of every token it produces is final.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The lexemes of the source, whitespace included.
    lexemes: Box<[Lexeme<'source>]>,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { lexemes: tokenize_complete(source) }
    }

    /// Scans the source into tokens, each paired with the region of source it came from.
    ///
    /// Variable names are interned into the given interner.
    pub fn scan(&self, interner: &mut Interner) -> Result<Vec<(Token, Range<usize>)>, Error> {
        let mut tokens: Vec<(Token, Range<usize>)> = Vec::new();

        for lexeme in self.lexemes.iter().filter(|lexeme| !lexeme.is_whitespace()) {
            let after_value = tokens.last().is_some_and(|(token, _)| token.ends_value());
            let token = match lexeme.kind {
                LexemeKind::Whitespace => continue,
                LexemeKind::Add if after_value => Operator::add().into(),
                LexemeKind::Add => Operator::plus().into(),
                LexemeKind::Sub if after_value => Operator::sub().into(),
                LexemeKind::Sub => Operator::neg().into(),
                LexemeKind::Mul => Operator::mul().into(),
                LexemeKind::Div => Operator::div().into(),
                LexemeKind::Exp => Operator::pow().into(),
                LexemeKind::OpenParen => Token::Paren(Paren::Open),
                LexemeKind::CloseParen => Token::Paren(Paren::Close),
                LexemeKind::Name => match FunctionKind::from_name(lexeme.text) {
                    Some(kind) => Function::new(kind).into(),
                    None => interner.intern(lexeme.text).into(),
                },
                LexemeKind::Number => lexeme.text
                    .parse::<f64>()
                    .map(Token::Constant)
                    .map_err(|_| Error::new(vec![lexeme.span.clone()], kind::InvalidNumber {
                        literal: lexeme.text.to_owned(),
                    }))?,
                LexemeKind::Symbol => return Err(Error::new(vec![lexeme.span.clone()], kind::InvalidSymbol {
                    symbol: lexeme.text.to_owned(),
                })),
            };

            tokens.push((token, lexeme.span.clone()));
        }

        debug!(target: "scan", tokens = tokens.len(), "scanned source");
        Ok(tokens)
    }

    /// Scans the source and builds its expression tree.
    pub fn parse(&self, interner: &mut Interner) -> Result<Node, Error> {
        let tokens = self.scan(interner)?;
        build::build_spanned(tokens)
    }
}

/// Parses the given source into an expression tree, interning its variables into `interner`.
pub fn parse(source: &str, interner: &mut Interner) -> Result<Node, Error> {
    Parser::new(source).parse(interner)
}
