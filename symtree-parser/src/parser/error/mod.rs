pub mod kind;

pub use symtree_error::{Category, Error};
