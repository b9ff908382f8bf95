pub mod kind;

pub use symtree_error::Error;
