//! Calculator module for inline expression suggestions.
//!
//! This module provides functionality to:
//! - Detect a `=`-terminated expression before the cursor
//! - Derive candidate expressions from the query and pick the first that evaluates
//! - Evaluate candidates with evalexpr, resolving identifiers through a symbol table

mod detection;
mod evaluation;
mod functions;
mod resolver;
mod symbols;

pub use detection::{TriggerSpan, detect, detect_at};
pub use evaluation::{CalcValue, EvalError, Evaluator};
pub use resolver::{candidates, resolve};
pub use symbols::SymbolTable;

/// Evaluator plus candidate resolution, built once and shared read-only.
#[derive(Debug, Default)]
pub struct Calculator {
    evaluator: Evaluator,
}

impl Calculator {
    /// Create a calculator that resolves identifiers through `symbols`.
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            evaluator: Evaluator::new(symbols),
        }
    }

    /// Resolve a query to the value of its first evaluable candidate.
    pub fn resolve(&self, query: &str) -> Option<CalcValue> {
        resolve(query, |candidate| self.evaluator.evaluate(candidate))
    }

    /// Evaluate a single expression as-is.
    pub fn evaluate(&self, expression: &str) -> Result<CalcValue, EvalError> {
        self.evaluator.evaluate(expression)
    }

    /// Constants visible to expressions.
    pub fn symbols(&self) -> &SymbolTable {
        self.evaluator.symbols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_full_query() {
        let calc = Calculator::default();
        assert_eq!(calc.resolve("1 + 2 * 3"), Some(CalcValue::Number(7.0)));
    }

    #[test]
    fn test_resolve_skips_garbage_prefix() {
        let calc = Calculator::default();
        assert_eq!(calc.resolve("x 2 + 3"), Some(CalcValue::Number(5.0)));
    }

    #[test]
    fn test_resolve_lowercase_constant() {
        let calc = Calculator::default();
        let value = calc.resolve("2 * π").unwrap();
        assert_eq!(value, CalcValue::Number(2.0 * std::f64::consts::PI));
        assert_eq!(value.to_string(), "6.283185307179586");
    }

    #[test]
    fn test_resolve_divides_as_floats() {
        let calc = Calculator::default();
        assert_eq!(calc.resolve("7 / 2"), Some(CalcValue::Number(3.5)));
        assert_eq!(calc.resolve("1 / 3"), Some(CalcValue::Number(1.0 / 3.0)));
        assert_eq!(calc.resolve("price 10 / 4"), Some(CalcValue::Number(2.5)));
    }

    #[test]
    fn test_resolve_overflow_uses_full_query() {
        let calc = Calculator::default();
        assert_eq!(
            calc.resolve("9223372036854775807 * 2"),
            Some(CalcValue::Number(9223372036854775807.0 * 2.0))
        );
    }

    #[test]
    fn test_resolve_division_by_zero() {
        let calc = Calculator::default();
        let value = calc.resolve("1 / 0").unwrap();
        assert_eq!(value.to_string(), "Infinity");
    }

    #[test]
    fn test_resolve_unknown_identifier() {
        let calc = Calculator::default();
        assert_eq!(calc.resolve("2 * Z"), None);
    }

    #[test]
    fn test_resolve_empty_query() {
        let calc = Calculator::default();
        assert_eq!(calc.resolve(""), None);
        assert_eq!(calc.resolve("   "), None);
    }

    #[test]
    fn test_resolve_with_custom_symbols() {
        let symbols = SymbolTable::builtin().with_constant("rate", 0.25);
        let calc = Calculator::new(symbols);
        assert_eq!(calc.resolve("total 400 * rate"), Some(CalcValue::Number(100.0)));
    }
}
