pub mod node;
pub mod visit;

pub use node::Node;
pub use visit::Visitor;
