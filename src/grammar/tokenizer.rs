//! Command tokenization

/// Split a raw command string into lowercase word tokens.
///
/// Trims, lowercases, splits on whitespace and drops empty fragments. A
/// blank or whitespace-only input yields an empty sequence (the ε case).
/// Pure and infallible.
///
/// # Examples
///
/// ```
/// use montymaze::grammar::tokenize;
///
/// assert_eq!(tokenize("  Puerta  A "), vec!["puerta", "a"]);
/// assert!(tokenize("   ").is_empty());
/// ```
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .trim()
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_splits() {
        assert_eq!(tokenize("Derecha"), vec!["derecha"]);
        assert_eq!(tokenize("NUEVA   partida"), vec!["nueva", "partida"]);
    }

    #[test]
    fn empty_and_blank_inputs_yield_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t \n").is_empty());
    }

    #[test]
    fn interior_runs_of_whitespace_collapse() {
        assert_eq!(tokenize(" puerta \t b "), vec!["puerta", "b"]);
    }
}
