//! Session driver: one load → execute → display → save cycle
//!
//! Loading never fails fatally: a missing backing file is the empty
//! store and an unreadable one is reported and treated the same way.
//! Persisting always runs and always overwrites the backing file, even
//! when the command was a no-op or failed.

use std::path::Path;

use crate::engine::{Execute, ExecutionResult, ResultData};
use crate::error::Result;
use crate::output::{format_output, OutputFormat};
use crate::parser::FromQuery;
use crate::storage::{self, Persist, Record};

/// Run one command against the store backed by `path` and print the
/// outcome. The returned result mirrors what was printed.
pub fn run<S>(mut store: S, path: &Path, query: &str, format: OutputFormat) -> Result<ExecutionResult>
where
    S: Execute + Persist,
    S::Command: FromQuery,
{
    if let Err(err) = storage::hydrate(&mut store, path) {
        eprintln!("Unable to read {}: {}", path.display(), err);
    }

    // An unparseable query (unknown mnemonic, empty string) is a
    // reported status, not a failure: the store is left unmutated and
    // the session still displays and persists.
    let data = match S::Command::from_query(query) {
        Ok(cmd) => store.execute(&cmd),
        Err(_) => ResultData::UnknownCommand(query.to_string()),
    };

    let contents = if S::SHOWS_CONTENTS {
        Some(render_contents(&store))
    } else {
        None
    };
    let result = ExecutionResult { data, contents };
    println!("{}", format_output(&result, &format));

    if let Err(err) = storage::persist(&store, path) {
        eprintln!("Unable to write {}: {}", path.display(), err);
    }

    Ok(result)
}

fn render_contents<S: Persist>(store: &S) -> String {
    store
        .records()
        .iter()
        .map(Record::encode)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DynArray, Element, HashTable, List, ListKind, Stack};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_array_session_persists_mutation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("array.data");
        let result = run(DynArray::new(), &path, "MPUSH 15", OutputFormat::Human).unwrap();
        assert_eq!(result.data, ResultData::Inserted(Element::Int(15)));
        assert_eq!(result.contents.as_deref(), Some("15"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "15\n");
    }

    #[test]
    fn test_failed_operation_still_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("array.data");
        run(DynArray::new(), &path, "MPUSH 15", OutputFormat::Human).unwrap();
        let result = run(DynArray::new(), &path, "MDEL 9", OutputFormat::Human).unwrap();
        assert_eq!(result.data, ResultData::IndexOutOfRange(9));
        assert_eq!(fs::read_to_string(&path).unwrap(), "15\n");
    }

    #[test]
    fn test_unknown_command_leaves_file_alone() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("list.data");
        run(List::new(ListKind::Single), &path, "LPUSH 5", OutputFormat::Human).unwrap();
        let result = run(
            List::new(ListKind::Single),
            &path,
            "ZAP 5",
            OutputFormat::Human,
        )
        .unwrap();
        assert_eq!(result.data, ResultData::UnknownCommand("ZAP 5".to_string()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "5\n");
    }

    #[test]
    fn test_stack_session_has_no_contents_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stack.data");
        let result = run(Stack::new(), &path, "SPUSH 10", OutputFormat::Human).unwrap();
        assert_eq!(result.contents, None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "10\n");
    }

    #[test]
    fn test_hash_session_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hash.data");
        run(HashTable::new(), &path, "HSET mykey1 value1", OutputFormat::Human).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "mykey1 value1\n");

        let result = run(HashTable::new(), &path, "HGET mykey1", OutputFormat::Human).unwrap();
        assert_eq!(
            result.data,
            ResultData::Found(Element::Pair {
                key: "mykey1".to_string(),
                value: "value1".to_string(),
            })
        );

        run(HashTable::new(), &path, "HDEL mykey1", OutputFormat::Human).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
