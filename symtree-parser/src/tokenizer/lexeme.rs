use logos::Logos;
use std::ops::Range;

/// The different kinds of lexemes that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum LexemeKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*'*")]
    Name,

    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl LexemeKind {
    /// Returns true if the lexeme represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, LexemeKind::Whitespace)
    }
}

/// A lexeme produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'source> {
    /// The region of the source code that this lexeme originated from.
    pub span: Range<usize>,

    /// The kind of lexeme.
    pub kind: LexemeKind,

    /// The raw text of the lexeme.
    pub text: &'source str,
}

impl Lexeme<'_> {
    /// Returns true if the lexeme represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
