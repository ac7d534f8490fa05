//! The single entry offered for a resolved trigger.

use crate::calculator::CalcValue;

/// A calculator suggestion.
#[derive(Clone, Debug, PartialEq)]
pub struct Suggestion {
    /// The query the value was resolved from.
    pub query: String,
    /// The evaluated value.
    pub value: CalcValue,
}

impl Suggestion {
    pub fn new(query: impl Into<String>, value: CalcValue) -> Self {
        Self {
            query: query.into(),
            value,
        }
    }

    /// The value preceded by `prefix`: `"↵ 5"` for the list, `" 5"` for insertion.
    pub fn prefixed(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts() {
        let item = Suggestion::new("2 + 3", CalcValue::Number(5.0));
        assert_eq!(item.prefixed("↵ "), "↵ 5");
        assert_eq!(item.prefixed(" "), " 5");
    }

    #[test]
    fn test_text_value() {
        let item = Suggestion::new("\"a\"", CalcValue::Text("A".to_string()));
        assert_eq!(item.prefixed(" "), " A");
    }
}
