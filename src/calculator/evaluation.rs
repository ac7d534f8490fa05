//! Expression evaluation using evalexpr.
//!
//! Wraps evalexpr with a context that resolves bare identifiers through the
//! [`SymbolTable`] and function calls through the formula functions, and
//! narrows the grammar's values down to numbers and text.
//!
//! evalexpr keeps integer literals as integers (`7 / 2` is `3`), so every
//! integer literal is rewritten as a float before evaluation.

use std::borrow::Cow;
use std::fmt;

use evalexpr::{Context, EvalexprError, EvalexprResult, Value};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use super::functions;
use super::symbols::SymbolTable;

lazy_static! {
    /// String literals, identifiers and number literals, in that order of preference.
    static ref LITERAL: Regex = Regex::new(
        r#""(?:[^"\\]|\\.)*"|[\p{L}_][\p{L}\p{N}_:]*|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?"#
    ).unwrap();
}

/// Value of a successfully evaluated expression.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcValue {
    /// A number; division by zero gives an infinity or NaN.
    Number(f64),
    /// A string produced by the grammar.
    Text(String),
}

impl fmt::Display for CalcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) if value.is_nan() => f.write_str("NaN"),
            Self::Number(value) if value.is_infinite() => {
                f.write_str(if value.is_sign_positive() {
                    "Infinity"
                } else {
                    "-Infinity"
                })
            }
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Why a candidate expression could not be evaluated.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum EvalError {
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("unsupported result: {0}")]
    Unsupported(&'static str),
    #[error("{0}")]
    Grammar(String),
}

impl From<EvalexprError> for EvalError {
    fn from(err: EvalexprError) -> Self {
        match err {
            EvalexprError::VariableIdentifierNotFound(name) => Self::UnknownSymbol(name),
            EvalexprError::FunctionIdentifierNotFound(name) => Self::UnknownFunction(name),
            other => Self::Grammar(other.to_string()),
        }
    }
}

/// Evaluates upper-cased candidate expressions.
///
/// Stateless per call; the symbol table is fixed at construction.
#[derive(Debug)]
pub struct Evaluator {
    context: SymbolContext,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(SymbolTable::builtin())
    }
}

impl Evaluator {
    /// Create an evaluator that resolves bare identifiers through `symbols`.
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            context: SymbolContext { symbols },
        }
    }

    /// The symbol table fixed at construction.
    pub fn symbols(&self) -> &SymbolTable {
        &self.context.symbols
    }

    /// Evaluate an expression.
    ///
    /// All arithmetic is done in `f64`. Fails on malformed syntax, unknown
    /// identifiers or functions, and on results that are neither a number
    /// nor text.
    pub fn evaluate(&self, expression: &str) -> Result<CalcValue, EvalError> {
        let expression = float_literals(expression);
        let value = evalexpr::eval_with_context(&expression, &self.context)?;

        match value {
            Value::Int(value) => Ok(CalcValue::Number(value as f64)),
            Value::Float(value) => Ok(CalcValue::Number(value)),
            Value::String(text) => Ok(CalcValue::Text(text)),
            Value::Boolean(flag) => Ok(CalcValue::Text(flag.to_string())),
            Value::Tuple(_) => Err(EvalError::Unsupported("tuple")),
            _ => Err(EvalError::Unsupported("empty")),
        }
    }
}

/// Rewrite integer literals as float literals, leaving strings and identifiers alone.
fn float_literals(expression: &str) -> Cow<'_, str> {
    LITERAL.replace_all(expression, |caps: &Captures| {
        let token = &caps[0];
        if token.bytes().all(|b| b.is_ascii_digit()) {
            format!("{}.0", token)
        } else {
            token.to_string()
        }
    })
}

/// Read-only evalexpr context backed by the symbol table.
#[derive(Debug)]
struct SymbolContext {
    symbols: SymbolTable,
}

impl Context for SymbolContext {
    fn get_value(&self, identifier: &str) -> Option<&Value> {
        self.symbols.value(identifier)
    }

    fn call_function(&self, identifier: &str, argument: &Value) -> EvalexprResult<Value> {
        functions::call(identifier, argument)
    }

    // evalexpr's builtins are lower-case and candidates are upper-cased, so
    // they stay off and every name goes through this context.
    fn are_builtin_functions_disabled(&self) -> bool {
        true
    }

    fn set_builtin_functions_disabled(&mut self, disabled: bool) -> EvalexprResult<()> {
        if disabled {
            Ok(())
        } else {
            Err(EvalexprError::CustomMessage(
                "builtin functions cannot be enabled".to_string(),
            ))
        }
    }
}
