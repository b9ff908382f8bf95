//! Interned variable names.

use std::{collections::HashSet, fmt::{self, Display, Formatter}, rc::Rc};

/// A variable token. Variables can only be created through an [`Interner`], which hands out the
/// same shared name for every occurrence of a given name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable(Rc<str>);

impl Variable {
    /// The name of the variable.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns true if both variables are the same interned instance.
    pub fn ptr_eq(&self, other: &Variable) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// The name of the formal derivative placeholder for this variable: the name followed by a
    /// prime.
    pub fn derivative_name(&self) -> String {
        format!("{}'", self.0)
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of every variable name seen so far.
///
/// Interning the same name twice returns the same instance, so that the number of allocations is
/// bounded by the number of distinct names. Names are never removed.
#[derive(Debug, Default)]
pub struct Interner {
    names: HashSet<Rc<str>>,
}

impl Interner {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the canonical variable for the given name, registering it if it is new.
    pub fn intern(&mut self, name: &str) -> Variable {
        if let Some(existing) = self.names.get(name) {
            return Variable(Rc::clone(existing));
        }

        let name: Rc<str> = Rc::from(name);
        self.names.insert(Rc::clone(&name));
        Variable(name)
    }

    /// Returns the canonical variable for the given name without registering it.
    pub fn get(&self, name: &str) -> Option<Variable> {
        self.names.get(name).cloned().map(Variable)
    }

    /// The number of distinct names registered.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no name has been registered.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_same_instance() {
        let mut interner = Interner::new();
        let a = interner.intern("x");
        let b = interner.intern("x");
        let c = interner.intern("y");

        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&c));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn get_does_not_register() {
        let mut interner = Interner::new();
        assert!(interner.get("x").is_none());
        assert!(interner.is_empty());

        let x = interner.intern("x");
        assert!(interner.get("x").is_some_and(|found| found.ptr_eq(&x)));
    }

    #[test]
    fn derivative_placeholder() {
        let mut interner = Interner::new();
        assert_eq!(interner.intern("y").derivative_name(), "y'");
    }
}
