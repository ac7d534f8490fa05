//! Inline calculator suggestions for text editors.
//!
//! Typing an expression that ends in `=` opens a suggestion session; the
//! single offered entry is the evaluated result, and accepting it inserts
//! `" " + result` right after the `=`.
//!
//! The crate is split into:
//! - [`calculator`]: trigger detection, candidate resolution and evaluation
//! - [`suggest`]: the host-facing traits and the suggestion session
//! - [`plugin`]: registration of the session with a host
//! - [`host`]: an in-memory host (buffer, workspace, dispatcher)

pub mod calculator;
pub mod config;
pub mod host;
pub mod logging;
pub mod plugin;
pub mod suggest;

pub use calculator::{CalcValue, Calculator, EvalError, SymbolTable};
pub use config::{CalcConfig, ConfigError};
pub use plugin::InlineCalcPlugin;
pub use suggest::session::InlineCalc;
