//! Typed commands for the five store families
//!
//! Operand handling is permissive by design: a missing or malformed
//! integer operand reads as 0 and a missing string operand as "". Store
//! code therefore never sees a parse failure; only an unknown mnemonic
//! is rejected.

use crate::error::{Result, StashError};
use crate::parser::grammar::tokenize;

/// Builds a family's command from a raw query string.
pub trait FromQuery: Sized {
    fn from_query(input: &str) -> Result<Self>;
}

/// Commands understood by the list service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListCommand {
    /// `LPUSH value` — insert at the head
    Push(i64),
    /// `LDEL value` — delete the first node holding the value
    Delete(i64),
    /// `LGET value` — report whether the value is present
    Get(i64),
}

/// Commands understood by the queue service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueCommand {
    /// `QPUSH value` — enqueue at the tail
    Push(i64),
    /// `QPOP` — dequeue the head
    Pop,
    /// `QPEEK` — read the head without removing it
    Peek,
}

/// Commands understood by the array service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrayCommand {
    /// `MPUSH value` — append
    Push(i64),
    /// `MADD index value` — insert at index
    Add { index: i64, value: i64 },
    /// `MDEL index` — delete at index
    Delete(i64),
    /// `MGET index` — read at index
    Get(i64),
    /// `MSET index value` — overwrite at index
    Set { index: i64, value: i64 },
    /// `MLEN` — element count
    Len,
}

/// Commands understood by the stack service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackCommand {
    /// `SPUSH value` — push on top
    Push(i64),
    /// `SPOP` — pop the top
    Pop,
    /// `SREAD` — list all elements, top first
    Read,
}

/// Commands understood by the hash service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashCommand {
    /// `HSET key value` — insert or overwrite by key
    Set { key: String, value: String },
    /// `HGET key` — look up by key
    Get(String),
    /// `HDEL key` — delete by key
    Del(String),
}

impl FromQuery for ListCommand {
    fn from_query(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        match tokens[0].as_str() {
            "LPUSH" => Ok(ListCommand::Push(int_operand(&tokens, 1))),
            "LDEL" => Ok(ListCommand::Delete(int_operand(&tokens, 1))),
            "LGET" => Ok(ListCommand::Get(int_operand(&tokens, 1))),
            _ => Err(StashError::UnknownCommand(input.to_string())),
        }
    }
}

impl FromQuery for QueueCommand {
    fn from_query(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        match tokens[0].as_str() {
            "QPUSH" => Ok(QueueCommand::Push(int_operand(&tokens, 1))),
            "QPOP" => Ok(QueueCommand::Pop),
            "QPEEK" => Ok(QueueCommand::Peek),
            _ => Err(StashError::UnknownCommand(input.to_string())),
        }
    }
}

impl FromQuery for ArrayCommand {
    fn from_query(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        match tokens[0].as_str() {
            "MPUSH" => Ok(ArrayCommand::Push(int_operand(&tokens, 1))),
            "MADD" => Ok(ArrayCommand::Add {
                index: int_operand(&tokens, 1),
                value: int_operand(&tokens, 2),
            }),
            "MDEL" => Ok(ArrayCommand::Delete(int_operand(&tokens, 1))),
            "MGET" => Ok(ArrayCommand::Get(int_operand(&tokens, 1))),
            "MSET" => Ok(ArrayCommand::Set {
                index: int_operand(&tokens, 1),
                value: int_operand(&tokens, 2),
            }),
            "MLEN" => Ok(ArrayCommand::Len),
            _ => Err(StashError::UnknownCommand(input.to_string())),
        }
    }
}

impl FromQuery for StackCommand {
    fn from_query(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        match tokens[0].as_str() {
            "SPUSH" => Ok(StackCommand::Push(int_operand(&tokens, 1))),
            "SPOP" => Ok(StackCommand::Pop),
            "SREAD" => Ok(StackCommand::Read),
            _ => Err(StashError::UnknownCommand(input.to_string())),
        }
    }
}

impl FromQuery for HashCommand {
    fn from_query(input: &str) -> Result<Self> {
        let tokens = tokenize(input)?;
        match tokens[0].as_str() {
            "HSET" => Ok(HashCommand::Set {
                key: text_operand(&tokens, 1),
                value: text_operand(&tokens, 2),
            }),
            "HGET" => Ok(HashCommand::Get(text_operand(&tokens, 1))),
            "HDEL" => Ok(HashCommand::Del(text_operand(&tokens, 1))),
            _ => Err(StashError::UnknownCommand(input.to_string())),
        }
    }
}

/// Integer operand at `index`, or 0 when absent or malformed.
fn int_operand(tokens: &[String], index: usize) -> i64 {
    tokens
        .get(index)
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

/// String operand at `index`, or empty when absent.
fn text_operand(tokens: &[String], index: usize) -> String {
    tokens.get(index).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_commands() {
        assert_eq!(
            ListCommand::from_query("LPUSH 5").unwrap(),
            ListCommand::Push(5)
        );
        assert_eq!(
            ListCommand::from_query("LDEL -3").unwrap(),
            ListCommand::Delete(-3)
        );
        assert_eq!(
            ListCommand::from_query("LGET 10").unwrap(),
            ListCommand::Get(10)
        );
    }

    #[test]
    fn test_missing_int_operand_defaults_to_zero() {
        assert_eq!(
            ListCommand::from_query("LPUSH").unwrap(),
            ListCommand::Push(0)
        );
        assert_eq!(
            ArrayCommand::from_query("MADD 1").unwrap(),
            ArrayCommand::Add { index: 1, value: 0 }
        );
    }

    #[test]
    fn test_malformed_int_operand_defaults_to_zero() {
        assert_eq!(
            QueueCommand::from_query("QPUSH abc").unwrap(),
            QueueCommand::Push(0)
        );
    }

    #[test]
    fn test_missing_text_operand_defaults_to_empty() {
        assert_eq!(
            HashCommand::from_query("HSET mykey1").unwrap(),
            HashCommand::Set {
                key: "mykey1".to_string(),
                value: String::new(),
            }
        );
    }

    #[test]
    fn test_parse_array_commands() {
        assert_eq!(
            ArrayCommand::from_query("MADD 1 20").unwrap(),
            ArrayCommand::Add { index: 1, value: 20 }
        );
        assert_eq!(
            ArrayCommand::from_query("MSET 0 30").unwrap(),
            ArrayCommand::Set { index: 0, value: 30 }
        );
        assert_eq!(ArrayCommand::from_query("MLEN").unwrap(), ArrayCommand::Len);
    }

    #[test]
    fn test_unknown_mnemonic_is_rejected() {
        assert!(matches!(
            StackCommand::from_query("FROB 1"),
            Err(StashError::UnknownCommand(_))
        ));
        // mnemonics are case-sensitive
        assert!(StackCommand::from_query("spush 1").is_err());
        // and family-scoped: the stack service does not know queue commands
        assert!(StackCommand::from_query("QPUSH 1").is_err());
    }

    #[test]
    fn test_extra_operands_are_ignored() {
        assert_eq!(
            StackCommand::from_query("SPOP 99 extra").unwrap(),
            StackCommand::Pop
        );
    }
}
