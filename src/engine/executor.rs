//! Command executor
//!
//! [`Execute`] dispatches one parsed command to a store's primitives and
//! reports the outcome as a [`ResultData`] status. Operation failures
//! (bad index, missing key, empty structure, unknown command) are
//! statuses, not errors: the session still displays and persists after
//! them.

use serde::Serialize;

use crate::parser::{ArrayCommand, HashCommand, ListCommand, QueueCommand, StackCommand};
use crate::store::{DynArray, Element, HashTable, List, Queue, SetOutcome, Stack};

/// Applies one command against a store.
pub trait Execute {
    type Command;

    /// Whether the session prints the full contents after every command.
    const SHOWS_CONTENTS: bool;

    fn execute(&mut self, cmd: &Self::Command) -> ResultData;
}

/// Result of one session: the command's outcome plus the rendered
/// contents line for the variants that display after every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: ResultData,
    pub contents: Option<String>,
}

/// Outcome of applying a single command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ResultData {
    Inserted(Element),
    InsertedAt { index: i64, value: i64 },
    Updated(Element),
    UpdatedAt { index: i64, value: i64 },
    Deleted(Element),
    DeletedAt(i64),
    Removed(i64),
    Popped(i64),
    Front(i64),
    Found(Element),
    NotFound(Element),
    ValueAt { index: i64, value: i64 },
    Length(usize),
    Elements(Vec<Element>),
    IndexOutOfRange(i64),
    KeyNotFound(String),
    EmptyStructure,
    UnknownCommand(String),
}

impl Execute for List {
    type Command = ListCommand;
    const SHOWS_CONTENTS: bool = true;

    fn execute(&mut self, cmd: &ListCommand) -> ResultData {
        match *cmd {
            ListCommand::Push(value) => {
                self.push_front(value);
                ResultData::Inserted(Element::Int(value))
            }
            ListCommand::Delete(value) => {
                // Deleting an absent value is a silent no-op.
                self.remove(value);
                ResultData::Deleted(Element::Int(value))
            }
            ListCommand::Get(value) => {
                if self.contains(value) {
                    ResultData::Found(Element::Int(value))
                } else {
                    ResultData::NotFound(Element::Int(value))
                }
            }
        }
    }
}

impl Execute for Queue {
    type Command = QueueCommand;
    const SHOWS_CONTENTS: bool = true;

    fn execute(&mut self, cmd: &QueueCommand) -> ResultData {
        match *cmd {
            QueueCommand::Push(value) => {
                self.enqueue(value);
                ResultData::Inserted(Element::Int(value))
            }
            QueueCommand::Pop => match self.dequeue() {
                Some(value) => ResultData::Removed(value),
                None => ResultData::EmptyStructure,
            },
            QueueCommand::Peek => match self.front() {
                Some(value) => ResultData::Front(value),
                None => ResultData::EmptyStructure,
            },
        }
    }
}

impl Execute for DynArray {
    type Command = ArrayCommand;
    const SHOWS_CONTENTS: bool = true;

    fn execute(&mut self, cmd: &ArrayCommand) -> ResultData {
        match *cmd {
            ArrayCommand::Push(value) => {
                self.push(value);
                ResultData::Inserted(Element::Int(value))
            }
            ArrayCommand::Add { index, value } => {
                if self.insert(index, value) {
                    ResultData::InsertedAt { index, value }
                } else {
                    ResultData::IndexOutOfRange(index)
                }
            }
            ArrayCommand::Delete(index) => {
                if self.remove(index) {
                    ResultData::DeletedAt(index)
                } else {
                    ResultData::IndexOutOfRange(index)
                }
            }
            ArrayCommand::Get(index) => match self.get(index) {
                Some(value) => ResultData::ValueAt { index, value },
                None => ResultData::IndexOutOfRange(index),
            },
            ArrayCommand::Set { index, value } => {
                if self.set(index, value) {
                    ResultData::UpdatedAt { index, value }
                } else {
                    ResultData::IndexOutOfRange(index)
                }
            }
            ArrayCommand::Len => ResultData::Length(self.len()),
        }
    }
}

impl Execute for Stack {
    type Command = StackCommand;
    const SHOWS_CONTENTS: bool = false;

    fn execute(&mut self, cmd: &StackCommand) -> ResultData {
        match *cmd {
            StackCommand::Push(value) => {
                self.push(value);
                ResultData::Inserted(Element::Int(value))
            }
            StackCommand::Pop => match self.pop() {
                Some(value) => ResultData::Popped(value),
                None => ResultData::EmptyStructure,
            },
            StackCommand::Read => ResultData::Elements(self.iter().map(Element::Int).collect()),
        }
    }
}

impl Execute for HashTable {
    type Command = HashCommand;
    const SHOWS_CONTENTS: bool = false;

    fn execute(&mut self, cmd: &HashCommand) -> ResultData {
        match cmd {
            HashCommand::Set { key, value } => {
                let element = Element::Pair {
                    key: key.clone(),
                    value: value.clone(),
                };
                match self.set(key, value) {
                    SetOutcome::Inserted => ResultData::Inserted(element),
                    SetOutcome::Updated => ResultData::Updated(element),
                }
            }
            HashCommand::Get(key) => match self.get(key) {
                Some(value) => ResultData::Found(Element::Pair {
                    key: key.clone(),
                    value: value.to_string(),
                }),
                None => ResultData::KeyNotFound(key.clone()),
            },
            HashCommand::Del(key) => match self.remove(key) {
                Some(entry) => ResultData::Deleted(Element::Pair {
                    key: entry.key,
                    value: entry.value,
                }),
                None => ResultData::KeyNotFound(key.clone()),
            },
        }
    }
}
