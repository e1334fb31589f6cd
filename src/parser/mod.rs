//! Command parsing for the stashdb services

pub mod ast;
pub mod grammar;

pub use ast::{ArrayCommand, FromQuery, HashCommand, ListCommand, QueueCommand, StackCommand};
pub use grammar::tokenize;
