use std::collections::HashMap;

/// Nested variable scopes, innermost last.
#[derive(Debug)]
pub struct Environment<T> {
    scopes: Vec<HashMap<String, T>>,
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Environment::new()
    }
}

impl<T> Environment<T> {
    /// An environment holding only the global scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![HashMap::new()],
        }
    }

    pub fn enter_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    /// Drops the innermost scope. The global scope is never dropped.
    pub fn exit_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Declares `name` in the innermost scope. Returns false, leaving the
    /// existing binding untouched, if that scope already declares it.
    pub fn declare(&mut self, name: &str, value: T) -> bool {
        let Some(scope) = self.scopes.last_mut() else {
            return false;
        };
        if scope.contains_key(name) {
            return false;
        }
        scope.insert(name.to_string(), value);
        true
    }

    /// The innermost binding of `name`.
    pub fn lookup(&self, name: &str) -> Option<&T> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Rebinds the innermost declaration of `name`, returning the old value.
    /// Returns `None` and drops `value` if `name` is not declared.
    pub fn update(&mut self, name: &str, value: T) -> Option<T> {
        self.scopes
            .iter_mut()
            .rev()
            .find_map(|scope| scope.get_mut(name))
            .map(|slot| std::mem::replace(slot, value))
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[test]
    fn test_declare_and_lookup() {
        let mut env = Environment::new();

        assert!(env.declare("x", 1));
        assert!(!env.declare("x", 2));
        assert_eq!(env.lookup("x"), Some(&1));
        assert_eq!(env.lookup("y"), None);
    }

    #[test]
    fn test_inner_scope_shadows_outer() {
        let mut env = Environment::new();
        env.declare("x", 1);

        env.enter_scope();
        assert!(env.declare("x", 2));
        assert_eq!(env.lookup("x"), Some(&2));

        env.exit_scope();
        assert_eq!(env.lookup("x"), Some(&1));
    }

    #[test]
    fn test_update_innermost() {
        let mut env = Environment::new();
        env.declare("x", 1);
        env.enter_scope();

        assert_eq!(env.update("x", 5), Some(1));
        assert_eq!(env.update("y", 5), None);
        env.exit_scope();
        assert_eq!(env.lookup("x"), Some(&5));
    }

    #[test]
    fn test_global_scope_is_kept() {
        let mut env: Environment<i32> = Environment::new();

        env.exit_scope();
        env.exit_scope();
        assert_eq!(env.depth(), 1);
        assert!(env.declare("x", 1));
    }
}
