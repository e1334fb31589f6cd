//! stash-list - persistent singly/doubly linked list service

use stashdb::cli::{self, ListArgs};
use stashdb::output::OutputFormat;
use stashdb::session;
use stashdb::store::List;

fn main() {
    let args: ListArgs = cli::parse_or_exit();
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    if let Err(e) = session::run(List::new(args.kind), &args.file, &args.query, format) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
