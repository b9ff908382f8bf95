use std::collections::HashMap;

/// Numeric bindings for variables, used when evaluating an expression.
///
/// The default context binds nothing, so evaluating a tree that contains a variable fails.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a context with no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the variable with the given name to a value, replacing any previous binding.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_owned(), value);
    }

    /// Builder-style version of [`Ctxt::add_var`].
    pub fn with_var(mut self, name: &str, value: f64) -> Self {
        self.add_var(name, value);
        self
    }

    /// Returns the value bound to the given variable.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }
}
