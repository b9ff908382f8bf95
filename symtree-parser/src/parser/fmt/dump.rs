use std::fmt::{Display, Formatter, Result};
use crate::parser::{ast::Node, token::{Paren, Token}};

/// Depth-first dump of a tree, one token description per line, indented with one tab per level.
///
/// ```text
/// OPERATOR ARITY=2, PRECEDENCE=1, TYPE=ADDITION
///     CONSTANT VALUE=2
///     VARIABLE NAME=x
/// ```
pub struct Dump<'a>(&'a Node);

impl Node {
    /// Returns a [`Display`]able dump of the tree rooted at this node.
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }
}

/// Writes the description of a single token.
fn fmt_token(f: &mut Formatter, token: &Token) -> Result {
    match token {
        Token::Constant(value) => write!(f, "CONSTANT VALUE={}", value),
        Token::Variable(var) => write!(f, "VARIABLE NAME={}", var),
        Token::Paren(Paren::Open) => write!(f, "PARENTHESIS OPEN"),
        Token::Paren(Paren::Close) => write!(f, "PARENTHESIS CLOSE"),
        Token::Operator(op) => write!(
            f,
            "OPERATOR ARITY={}, PRECEDENCE={}, TYPE={}",
            op.arity,
            op.precedence,
            op.kind.name(),
        ),
        Token::Function(func) => write!(f, "FUNCTION ARITY={}, TYPE={}", func.arity, func.kind.name()),
    }
}

fn fmt_node(f: &mut Formatter, node: &Node, depth: usize) -> Result {
    for _ in 0..depth {
        write!(f, "\t")?;
    }
    fmt_token(f, node.token())?;
    writeln!(f)?;

    node.children()
        .iter()
        .try_for_each(|child| fmt_node(f, child, depth + 1))
}

impl Display for Dump<'_> {
    fn fmt(&self, f: &mut Formatter) -> Result {
        fmt_node(f, self.0, 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::parser::{parse, token::Interner};

    #[test]
    fn indented_by_depth() {
        let mut interner = Interner::new();
        let tree = parse("2 + -x", &mut interner).unwrap();

        assert_eq!(tree.dump().to_string(), concat!(
            "OPERATOR ARITY=2, PRECEDENCE=1, TYPE=ADDITION\n",
            "\tCONSTANT VALUE=2\n",
            "\tOPERATOR ARITY=1, PRECEDENCE=1000, TYPE=ARITHMETIC_NEGATION\n",
            "\t\tVARIABLE NAME=x\n",
        ));
    }

    #[test]
    fn functions() {
        let mut interner = Interner::new();
        let tree = parse("ln 3", &mut interner).unwrap();

        assert_eq!(tree.dump().to_string(), "FUNCTION ARITY=1, TYPE=NATURAL_LOG\n\tCONSTANT VALUE=3\n");
    }
}
