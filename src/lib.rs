//! stashdb - file-backed data structures driven by one-shot commands
//!
//! Each service loads a plain-text file into its in-memory store,
//! applies exactly one command, reports the outcome, and writes the
//! whole store back. Five store shapes share the same engine:
//! singly/doubly linked list, queue, dynamic array, stack, and hash
//! table.
//!
//! # Example
//!
//! ```no_run
//! use stashdb::{session, store::Stack, output::OutputFormat};
//!
//! let stack = Stack::new();
//! session::run(
//!     stack,
//!     std::path::Path::new("stack.data"),
//!     "SPUSH 10",
//!     OutputFormat::Human,
//! ).unwrap();
//! ```

pub mod cli;
pub mod engine;
pub mod error;
pub mod output;
pub mod parser;
pub mod session;
pub mod storage;
pub mod store;

pub use engine::{Execute, ExecutionResult, ResultData};
pub use error::{Result, StashError};
pub use output::{format_output, OutputFormat};
pub use parser::{
    ArrayCommand, FromQuery, HashCommand, ListCommand, QueueCommand, StackCommand,
};
pub use storage::{hydrate, persist, Persist, Record};
pub use store::{DynArray, Element, HashTable, List, ListKind, Queue, Stack};
