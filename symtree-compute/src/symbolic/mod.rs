//! Symbolic manipulation of expression trees.
//!
//! # Copying
//!
//! Trees are strict: a node has exactly one parent. When a result needs the same subexpression
//! in more than one place, such as `f` in the quotient rule `(f' * g - f * g') / (g * g)`, each
//! occurrence is an independent [`copy()`] of the original.
//!
//! # Differentiation
//!
//! [`derivative()`] computes the formal derivative of a tree with respect to a named variable,
//! using a fixed table of rules keyed by operator and function kind. Other variables are treated
//! as functions of the target, so the derivative of `y` with respect to `x` is the placeholder
//! variable `y'`.
//!
//! ```
//! use symtree_compute::symbolic::derivative;
//! use symtree_parser::parser::{parse, token::Interner};
//!
//! let mut interner = Interner::new();
//! let tree = parse("x * x", &mut interner).unwrap();
//! let d = derivative(&tree, "x", &mut interner).unwrap();
//!
//! assert_eq!(d.to_string(), "1 * x + x * 1");
//! ```
//!
//! # Optimization
//!
//! The [`optimize`] module rewrites trees into simpler, equivalent forms. Each
//! [`optimize::Pass`] preserves the value of the tree; the [`optimize::Pipeline`] runs a list of
//! passes in order.
//!
//! # Limits
//!
//! Copying, differentiation, evaluation and every optimizer pass recurse once per level of
//! nesting, as does dropping a tree. A deeply enough nested expression overflows the stack; the
//! depth is not checked at runtime.

pub mod copy;
pub mod derivative;
pub mod error;
pub mod optimize;
pub mod step_collector;

pub use copy::copy;
pub use derivative::derivative;
pub use step_collector::StepCollector;
