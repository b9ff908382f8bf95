//! Computation over expression trees built by [`symtree_parser`].
//!
//! - [`numerical`] evaluates trees to `f64` values.
//! - [`symbolic`] copies, differentiates and optimizes trees.

pub mod numerical;
pub mod symbolic;

pub use numerical::{ctxt::Ctxt, eval::Eval};
pub use symbolic::{copy, derivative, optimize};
