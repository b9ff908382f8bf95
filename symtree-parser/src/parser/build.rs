//! Operator-precedence construction of expression trees.
//!
//! The builder keeps two stacks: pending operators, functions and open parentheses, and the
//! subtrees built so far. Operands are pushed as leaves; an operator first reduces every pending
//! operator that binds at least as tightly as itself, then waits on the stack for its right-hand
//! operand. Unary `+` and `-` carry the highest precedence and are right-associative, so a chain
//! such as `-+-5` never reduces until its operand has been pushed and builds as nested
//! single-child nodes.
//!
//! The builder trusts the arity encoded on each token. Telling unary and binary signs apart is
//! the job of whoever produced the tokens.
//!
//! # Limits
//!
//! Building itself uses explicit stacks, but the resulting tree is consumed recursively by every
//! other operation, including its `Drop`. Nesting depth is bounded only by the thread's stack.

use super::{
    ast::Node,
    error::{kind, Error},
    token::{Associativity, Paren, Precedence, Token},
};
use std::ops::Range;
use tracing::debug;

/// An entry of the pending-operator stack.
#[derive(Debug)]
struct Pending {
    token: Token,
    span: Range<usize>,
}

/// The two stacks of the reduction.
#[derive(Debug, Default)]
struct Builder {
    operators: Vec<Pending>,
    operands: Vec<Node>,
}

impl Builder {
    /// Pops `arity` operands (the rightmost operand is on top) and pushes the node applying the
    /// pending operator to them.
    fn reduce(&mut self, pending: Pending) -> Result<(), Error> {
        let arity = pending.token.arity();
        if self.operands.len() < arity {
            return Err(Error::new(vec![pending.span], kind::TooFewOperands {
                expected: arity,
                found: self.operands.len(),
            }));
        }

        let children = self.operands.split_off(self.operands.len() - arity);
        let span = children.iter()
            .map(Node::span)
            .fold(pending.span, |acc, span| acc.start.min(span.start)..acc.end.max(span.end));
        self.operands.push(Node::new(pending.token, children, span));
        Ok(())
    }

    /// Handles a closing parenthesis: reduces until the matching opening parenthesis, which is
    /// discarded.
    fn close_group(&mut self, span: Range<usize>) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                Some(Pending { token: Token::Paren(Paren::Open), .. }) => return Ok(()),
                Some(pending) => self.reduce(pending)?,
                None => return Err(Error::new(vec![span], kind::MissingOpenParenthesis)),
            }
        }
    }

    /// Reduces every pending operator that must be applied before an operator with the given
    /// binding is pushed.
    fn reduce_before(&mut self, precedence: Precedence, associativity: Associativity) -> Result<(), Error> {
        while let Some(top) = self.operators.last() {
            let Some((top_precedence, _)) = top.token.binding() else {
                break;
            };

            let binds_tighter = top_precedence > precedence
                || (top_precedence == precedence && associativity == Associativity::Left);
            if !binds_tighter {
                break;
            }

            if let Some(pending) = self.operators.pop() {
                self.reduce(pending)?;
            }
        }

        Ok(())
    }

    /// Feeds a single token to the builder.
    fn push(&mut self, token: Token, span: Range<usize>) -> Result<(), Error> {
        match token {
            Token::Constant(_) | Token::Variable(_) => self.operands.push(Node::leaf(token, span)),
            Token::Paren(Paren::Open) => self.operators.push(Pending { token, span }),
            Token::Paren(Paren::Close) => self.close_group(span)?,
            Token::Operator(_) | Token::Function(_) => {
                if let Some((precedence, associativity)) = token.binding() {
                    self.reduce_before(precedence, associativity)?;
                }
                self.operators.push(Pending { token, span });
            },
        }

        Ok(())
    }

    /// Reduces everything left on the stacks and returns the single resulting tree.
    fn finish(mut self, eof: Range<usize>) -> Result<Node, Error> {
        while let Some(pending) = self.operators.pop() {
            if let Token::Paren(Paren::Open) = pending.token {
                return Err(Error::new(vec![pending.span], kind::UnclosedParenthesis));
            }
            self.reduce(pending)?;
        }

        match self.operands.len() {
            0 => Err(Error::new(vec![eof], kind::EmptyExpression)),
            1 => Ok(self.operands.remove(0)),
            n => Err(Error::new(
                self.operands[1..].iter().map(Node::span).collect(),
                kind::TooManyOperands { extra: n - 1 },
            )),
        }
    }
}

/// Builds a tree from a sequence of tokens with their source spans.
///
/// Fails with a [`MalformedExpression`](symtree_error::Category::MalformedExpression) error if the
/// tokens cannot be reduced to exactly one tree. No partial tree is returned on failure.
pub fn build_spanned(tokens: impl IntoIterator<Item = (Token, Range<usize>)>) -> Result<Node, Error> {
    let mut builder = Builder::default();
    let mut eof = 0..0;

    for (token, span) in tokens {
        eof = span.end..span.end;
        builder.push(token, span)?;
    }

    let tree = builder.finish(eof)?;
    debug!(target: "build", nodes = tree.size(), "built expression tree");
    Ok(tree)
}

/// Builds a tree from a sequence of tokens that carry no source positions.
pub fn build(tokens: impl IntoIterator<Item = Token>) -> Result<Node, Error> {
    build_spanned(tokens.into_iter().map(|token| (token, 0..0)))
}
