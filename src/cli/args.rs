//! CLI argument parsing

use clap::Parser;
use std::path::PathBuf;

use crate::store::ListKind;

/// Arguments shared by the queue, array, stack, and hash services.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct StoreArgs {
    /// Path of the backing file
    #[arg(long)]
    pub file: PathBuf,

    /// The command to apply, e.g. 'QPUSH 10'
    #[arg(long)]
    pub query: String,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the list service, which also picks an implementation.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct ListArgs {
    /// Path of the backing file
    #[arg(long)]
    pub file: PathBuf,

    /// List implementation to operate on
    #[arg(long = "type", value_enum)]
    pub kind: ListKind,

    /// The command to apply, e.g. 'LPUSH 5'
    #[arg(long)]
    pub query: String,

    /// Output format as JSON
    #[arg(long)]
    pub json: bool,
}
