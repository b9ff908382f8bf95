//! The individual optimizer passes.

mod negation;
mod unary_plus;

pub use negation::DoubleNegation;
pub use unary_plus::UnaryPlus;
