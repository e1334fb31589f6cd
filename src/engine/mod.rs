//! Command execution engine

pub mod executor;

pub use executor::{Execute, ExecutionResult, ResultData};
