pub mod lexeme;

use logos::{Lexer, Logos};
pub use lexeme::{Lexeme, LexemeKind};

/// Returns an iterator over the lexeme kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<'_, LexemeKind> {
    LexemeKind::lexer(input)
}

/// Returns an owned array containing all of the lexemes produced by the tokenizer.
///
/// Input the lexer cannot match is kept as a [`LexemeKind::Symbol`], so that the parser can
/// report it with a span instead of silently stopping early.
pub fn tokenize_complete(input: &str) -> Box<[Lexeme<'_>]> {
    let mut lexer = tokenize(input);
    let mut lexemes = Vec::new();

    while let Some(kind) = lexer.next() {
        lexemes.push(Lexeme {
            span: lexer.span(),
            kind: kind.unwrap_or(LexemeKind::Symbol),
            text: lexer.slice(),
        });
    }

    lexemes.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the lexemes produced by the tokenizer to the raw expected lexemes.
    fn compare_lexemes<'source, const N: usize>(input: &'source str, expected: [(LexemeKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_text) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_text);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_lexemes(
            "1 + 2",
            [
                (LexemeKind::Number, "1"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Add, "+"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Number, "2"),
            ],
        );
    }

    #[test]
    fn nested_signs() {
        compare_lexemes(
            "-1 * -2 / --(4 --5)",
            [
                (LexemeKind::Sub, "-"),
                (LexemeKind::Number, "1"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Mul, "*"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Sub, "-"),
                (LexemeKind::Number, "2"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Div, "/"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Sub, "-"),
                (LexemeKind::Sub, "-"),
                (LexemeKind::OpenParen, "("),
                (LexemeKind::Number, "4"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Sub, "-"),
                (LexemeKind::Sub, "-"),
                (LexemeKind::Number, "5"),
                (LexemeKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn numbers() {
        compare_lexemes(
            "-5.25 1e9 2.5E-3",
            [
                (LexemeKind::Sub, "-"),
                (LexemeKind::Number, "5.25"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Number, "1e9"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Number, "2.5E-3"),
            ],
        );
    }

    #[test]
    fn trailing_decimal_point() {
        compare_lexemes(
            "1. * 2.e3",
            [
                (LexemeKind::Number, "1."),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Mul, "*"),
                (LexemeKind::Whitespace, " "),
                (LexemeKind::Number, "2.e3"),
            ],
        );
    }

    #[test]
    fn repeated_decimal_point() {
        compare_lexemes(
            "1.5.5",
            [
                (LexemeKind::Number, "1.5"),
                (LexemeKind::Symbol, "."),
                (LexemeKind::Number, "5"),
            ],
        );
    }

    #[test]
    fn names_and_functions() {
        compare_lexemes(
            "sin(x_1)^y'",
            [
                (LexemeKind::Name, "sin"),
                (LexemeKind::OpenParen, "("),
                (LexemeKind::Name, "x_1"),
                (LexemeKind::CloseParen, ")"),
                (LexemeKind::Exp, "^"),
                (LexemeKind::Name, "y'"),
            ],
        );
    }

    #[test]
    fn unknown_symbol() {
        let lexemes = tokenize_complete("2 $ 3");
        assert_eq!(lexemes[2], Lexeme { span: 2..3, kind: LexemeKind::Symbol, text: "$" });
    }
}
