//! Candidate resolution.
//!
//! A query is split into space-separated tokens and every suffix of the
//! token list becomes a candidate, longest first. The first candidate that
//! evaluates wins, so trailing text can still produce a result when the
//! start of the line is not part of the expression.

use tracing::trace;

use super::evaluation::{CalcValue, EvalError};

/// Build the candidate expressions for a query, longest first.
///
/// `"1 + 2 * 3"` gives `["1 + 2 * 3", "+ 2 * 3", "2 * 3", "* 3", "3"]`.
/// Runs of spaces collapse; an empty or blank query gives no candidates.
pub fn candidates(query: &str) -> Vec<String> {
    let tokens: Vec<&str> = query.split(' ').filter(|token| !token.is_empty()).collect();

    (0..tokens.len()).map(|i| tokens[i..].join(" ")).collect()
}

/// Resolve a query to the value of its first successful candidate.
///
/// Each candidate is upper-cased before being handed to `evaluate`. Failed
/// candidates are skipped; `None` means nothing evaluated.
pub fn resolve<F>(query: &str, mut evaluate: F) -> Option<CalcValue>
where
    F: FnMut(&str) -> Result<CalcValue, EvalError>,
{
    for candidate in candidates(query) {
        let candidate = candidate.to_uppercase();
        match evaluate(&candidate) {
            Ok(value) => {
                trace!(%candidate, %value, "candidate resolved");
                return Some(value);
            }
            Err(err) => trace!(%candidate, %err, "candidate failed"),
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_are_suffixes_longest_first() {
        assert_eq!(
            candidates("1 + 2 * 3"),
            vec!["1 + 2 * 3", "+ 2 * 3", "2 * 3", "* 3", "3"]
        );
        assert_eq!(candidates("2 + 3"), vec!["2 + 3", "+ 3", "3"]);
    }

    #[test]
    fn test_candidates_collapse_spaces() {
        assert_eq!(candidates("  2   +  3 "), vec!["2 + 3", "+ 3", "3"]);
    }

    #[test]
    fn test_candidates_repeated_operators() {
        assert_eq!(candidates("- - 1"), vec!["- - 1", "- 1", "1"]);
    }

    #[test]
    fn test_empty_query_has_no_candidates() {
        assert!(candidates("").is_empty());
        assert!(candidates("    ").is_empty());
    }

    #[test]
    fn test_first_success_wins() {
        let mut seen = Vec::new();
        let result = resolve("x 2 + 3", |candidate| {
            seen.push(candidate.to_string());
            match candidate {
                "2 + 3" => Ok(CalcValue::Number(5.0)),
                "3" => Ok(CalcValue::Number(3.0)),
                _ => Err(EvalError::Grammar("invalid".to_string())),
            }
        });

        assert_eq!(result, Some(CalcValue::Number(5.0)));
        assert_eq!(seen, vec!["X 2 + 3", "2 + 3"]);
    }

    #[test]
    fn test_candidates_are_uppercased() {
        let mut seen = Vec::new();
        let result = resolve("2 * π", |candidate| {
            seen.push(candidate.to_string());
            Err(EvalError::UnknownSymbol(candidate.to_string()))
        });

        assert_eq!(result, None);
        assert_eq!(seen, vec!["2 * Π", "* Π", "Π"]);
    }

    #[test]
    fn test_empty_query_never_evaluates() {
        let mut calls = 0;
        let result = resolve("", |_| {
            calls += 1;
            Ok(CalcValue::Number(0.0))
        });

        assert_eq!(result, None);
        assert_eq!(calls, 0);
    }
}
