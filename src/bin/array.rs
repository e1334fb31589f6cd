//! stash-array - persistent dynamic array service

use stashdb::cli::{self, StoreArgs};
use stashdb::output::OutputFormat;
use stashdb::session;
use stashdb::store::DynArray;

fn main() {
    let args: StoreArgs = cli::parse_or_exit();
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    if let Err(e) = session::run(DynArray::new(), &args.file, &args.query, format) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
