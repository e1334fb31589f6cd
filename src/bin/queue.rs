//! stash-queue - persistent FIFO queue service

use stashdb::cli::{self, StoreArgs};
use stashdb::output::OutputFormat;
use stashdb::session;
use stashdb::store::Queue;

fn main() {
    let args: StoreArgs = cli::parse_or_exit();
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    if let Err(e) = session::run(Queue::new(), &args.file, &args.query, format) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
