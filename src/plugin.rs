//! Host plugin entry point.

use std::sync::Arc;

use tracing::debug;

use crate::calculator::Calculator;
use crate::config::CalcConfig;
use crate::suggest::{InlineCalc, SuggestRegistry};

/// Owns the shared calculator and registers the inline suggestion source.
pub struct InlineCalcPlugin {
    calculator: Arc<Calculator>,
    config: CalcConfig,
}

impl Default for InlineCalcPlugin {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl InlineCalcPlugin {
    /// Build the symbol table and evaluator once for all sessions.
    pub fn new(config: CalcConfig) -> Self {
        let calculator = Arc::new(Calculator::new(config.symbol_table()));
        Self { calculator, config }
    }

    pub fn calculator(&self) -> &Arc<Calculator> {
        &self.calculator
    }

    pub fn onload(&self, registry: &mut dyn SuggestRegistry) {
        debug!(
            constants = self.calculator.symbols().len(),
            "registering inline calculator"
        );
        registry.register_editor_suggest(Box::new(InlineCalc::new(
            Arc::clone(&self.calculator),
            self.config.clone(),
        )));
    }
}
