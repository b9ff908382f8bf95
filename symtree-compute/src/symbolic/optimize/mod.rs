//! Value-preserving rewrites of expression trees.
//!
//! A [`Pass`] consumes a tree and returns its replacement; nodes are never modified in place. A
//! pass applies its rule to a node until the rule no longer matches, then descends into the
//! resulting node's children. Passes perform no constant folding: `1 * x` stays as it is.
//!
//! ```
//! use symtree_compute::symbolic::optimize::Pipeline;
//! use symtree_parser::parser::{parse, token::Interner};
//!
//! let mut interner = Interner::new();
//! let tree = parse("--(+x * -+-2)", &mut interner).unwrap();
//!
//! assert_eq!(Pipeline::standard().run(tree).to_string(), "x * 2");
//! ```

pub mod rules;
mod step;

pub use step::Step;

use super::step_collector::StepCollector;
use symtree_parser::parser::ast::Node;
use tracing::debug;

/// A value-preserving rewrite of a tree.
///
/// For every tree `t` that can be evaluated, evaluating `rewrite(t)` gives the same value.
pub trait Pass {
    /// A short human-readable name, used in logs.
    fn name(&self) -> &'static str;

    /// Rewrites the tree rooted at `node`, recording each applied rewrite in `steps`.
    fn rewrite(&self, node: Node, steps: &mut dyn StepCollector<Step>) -> Node;
}

/// An ordered list of passes, each run once over the output of the previous one.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    /// Creates a pipeline with no passes. Running it returns the tree unchanged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the standard pipeline: unary-plus elimination, then double-negation collapse.
    pub fn standard() -> Self {
        Self::new()
            .with(rules::UnaryPlus)
            .with(rules::DoubleNegation)
    }

    /// Appends a pass to the pipeline.
    pub fn with(mut self, pass: impl Pass + 'static) -> Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// The names of the passes, in the order they run.
    pub fn pass_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.passes.iter().map(|pass| pass.name())
    }

    /// Runs every pass over the tree.
    pub fn run(&self, node: Node) -> Node {
        self.run_with_steps(node, &mut ())
    }

    /// Runs every pass over the tree, recording the applied rewrites in `steps`.
    pub fn run_with_steps(&self, node: Node, steps: &mut dyn StepCollector<Step>) -> Node {
        self.passes.iter().fold(node, |node, pass| {
            debug!(target: "optimize", pass = pass.name(), nodes = node.size(), "running pass");
            pass.rewrite(node, steps)
        })
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_list().entries(self.pass_names()).finish()
    }
}

/// Runs the [standard pipeline](Pipeline::standard) over the tree.
pub fn optimize(node: Node) -> Node {
    Pipeline::standard().run(node)
}

/// Runs the [standard pipeline](Pipeline::standard) over the tree, returning the applied
/// rewrites along with the result.
pub fn optimize_with_steps(node: Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let node = Pipeline::standard().run_with_steps(node, &mut steps);
    (node, steps)
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;
    use super::*;
    use crate::{numerical::eval::Eval, symbolic::{copy, derivative}};
    use symtree_parser::parser::{parse, token::Interner};

    #[test]
    fn standard_order() {
        let names = Pipeline::standard().pass_names().collect::<Vec<_>>();
        assert_eq!(names, vec!["unary-plus elimination", "double-negation collapse"]);
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let mut interner = Interner::new();
        let tree = parse("-+-x", &mut interner).unwrap();
        let expected = copy(&tree, &mut interner);
        assert_eq!(Pipeline::new().run(tree), expected);
    }

    #[test]
    fn plus_between_negations() {
        // the double negation only becomes visible once the plus is gone
        let mut interner = Interner::new();
        let tree = parse("-+-x", &mut interner).unwrap();
        let (result, steps) = optimize_with_steps(tree);

        assert_eq!(result.to_string(), "x");
        assert_eq!(steps, vec![Step::RemoveUnaryPlus(1..4), Step::CollapseDoubleNegation(0..4)]);
    }

    #[test]
    fn value_preserved() {
        let mut interner = Interner::new();
        for (source, expected) in [
            ("1*(2+3)", 5.0),
            ("2+3*4", 14.0),
            ("-1*-2/--(4--5)", 2.0 / 9.0),
            ("-+-+-5", -5.0),
            ("+(--3) ^ -+-2", 9.0),
        ] {
            let tree = parse(source, &mut interner).unwrap();
            assert_float_absolute_eq!(tree.eval_default().unwrap(), expected);
            assert_float_absolute_eq!(optimize(tree).eval_default().unwrap(), expected);
        }
    }

    #[test]
    fn leaves_derivative_structure_alone() {
        let mut interner = Interner::new();
        let tree = parse("x*x", &mut interner).unwrap();
        let d = derivative(&tree, "x", &mut interner).unwrap();
        let before = copy(&d, &mut interner);

        assert_eq!(optimize(d), before);
    }
}
