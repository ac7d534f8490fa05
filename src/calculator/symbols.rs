//! Named constants available to calculator expressions.

use std::collections::BTreeMap;
use std::f64::consts::{E, PI};

use evalexpr::Value;

/// Immutable mapping from identifier to numeric constant.
///
/// Names are case-insensitive: keys are stored upper-cased and lookups are
/// upper-cased before probing, so `π` and `Π` name the same constant.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: BTreeMap<String, Value>,
}

impl SymbolTable {
    /// An empty table; every identifier is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in constants.
    pub fn builtin() -> Self {
        Self::new()
            .with_constant("π", PI)
            .with_constant("PHI", PI * 2.0)
            .with_constant("PI", PI)
            .with_constant("TAU", PI * 2.0)
            .with_constant("E", E)
    }

    /// Add (or replace) a constant.
    pub fn with_constant(mut self, name: &str, value: f64) -> Self {
        self.entries.insert(name.to_uppercase(), Value::Float(value));
        self
    }

    #[cfg(test)]
    pub(crate) fn get(&self, name: &str) -> Option<f64> {
        match self.value(name)? {
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Look up the grammar value stored for `name`.
    pub(crate) fn value(&self, name: &str) -> Option<&Value> {
        self.entries.get(&name.to_uppercase())
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&name.to_uppercase())
    }

    /// Number of constants.
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_constants() {
        let table = SymbolTable::builtin();
        assert_eq!(table.get("π"), Some(PI));
        assert_eq!(table.get("PHI"), Some(PI * 2.0));
        assert_eq!(table.get("E"), Some(E));
    }

    #[test]
    fn test_lookup_ignores_case() {
        let table = SymbolTable::builtin();
        assert_eq!(table.get("Π"), Some(PI));
        assert_eq!(table.get("pi"), Some(PI));
        assert_eq!(table.get("Phi"), Some(PI * 2.0));
    }

    #[test]
    fn test_unknown_symbol() {
        let table = SymbolTable::builtin();
        assert_eq!(table.get("Z"), None);
        assert!(!table.contains("x"));
        assert_eq!(SymbolTable::new().len(), 0);
    }

    #[test]
    fn test_custom_constant_overrides() {
        let table = SymbolTable::builtin().with_constant("e", 3.0);
        assert_eq!(table.get("E"), Some(3.0));
        assert_eq!(table.len(), SymbolTable::builtin().len());
    }
}
