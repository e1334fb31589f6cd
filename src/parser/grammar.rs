//! Pest tokenizer for stashdb commands

use pest::Parser;
use pest_derive::Parser;

use crate::error::{Result, StashError};

#[derive(Parser)]
#[grammar = "../grammar/stashdb.pest"]
pub struct QueryParser;

/// Split a command string into its whitespace-delimited tokens.
///
/// The first token is always the mnemonic; typing and arity of the
/// remaining tokens are the concern of [`crate::parser::ast`].
pub fn tokenize(input: &str) -> Result<Vec<String>> {
    let pairs = QueryParser::parse(Rule::command, input)
        .map_err(|e| StashError::ParseError(e.to_string()))?;

    let pair = pairs
        .into_iter()
        .next()
        .ok_or_else(|| StashError::ParseError("Empty input".to_string()))?;

    Ok(pair
        .into_inner()
        .filter(|p| p.as_rule() == Rule::token)
        .map(|p| p.as_str().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        let tokens = tokenize("HSET mykey1 value1").unwrap();
        assert_eq!(tokens, vec!["HSET", "mykey1", "value1"]);
    }

    #[test]
    fn test_tokenize_collapses_repeated_whitespace() {
        let tokens = tokenize("  MADD \t 1   20 ").unwrap();
        assert_eq!(tokens, vec!["MADD", "1", "20"]);
    }

    #[test]
    fn test_tokenize_single_mnemonic() {
        assert_eq!(tokenize("MLEN").unwrap(), vec!["MLEN"]);
    }

    #[test]
    fn test_tokenize_rejects_empty_input() {
        assert!(tokenize("").is_err());
        assert!(tokenize("   ").is_err());
    }
}
