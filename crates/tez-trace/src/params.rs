//! Raw parameter token splitting for interactively supplied input.

/// Split a user-supplied parameter string into raw tokens.
///
/// Comma-separated input yields one token per segment; a single token with
/// no separator yields a one-element list (single-parameter entrypoints
/// must not require commas); empty input yields no tokens.
pub fn split_raw_params(input: &str) -> Vec<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split(',').map(|s| s.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_empty() {
        assert!(split_raw_params("").is_empty());
        assert!(split_raw_params("   ").is_empty());
    }

    #[test]
    fn test_split_single_token_without_separator() {
        assert_eq!(split_raw_params("42"), vec!["42"]);
    }

    #[test]
    fn test_split_multiple_tokens() {
        assert_eq!(
            split_raw_params("42, tz1abc,true"),
            vec!["42", "tz1abc", "true"]
        );
    }
}
