//! Compound database for batch validation.
//!
//! A CAS-keyed store backed by an embedded tab-separated corpus. Loading is
//! incremental in fixed-size batches, mirroring cursor-style iteration over
//! a large registry, with full-load and external-file variants.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use thiserror::Error;

/// Compounds pulled in per [`CompoundDatabase::load_next_batch`] call.
pub const BATCH_SIZE: usize = 25;

const EMBEDDED_CORPUS: &str = include_str!("../../resources/compounds.tsv");

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read compound file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed compound record on line {line}: {details}")]
    Parse { line: usize, details: String },
}

/// One registry entry: CAS number, structure notation, trivial name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundEntry {
    pub cas: String,
    pub smiles: String,
    pub name: String,
}

/// CAS-keyed compound store with an incremental load cursor over the
/// embedded corpus.
#[derive(Debug, Default)]
pub struct CompoundDatabase {
    by_cas: BTreeMap<String, CompoundEntry>,
    cursor: usize,
}

impl CompoundDatabase {
    /// An empty database positioned at the start of the embedded corpus.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Load the next batch from the embedded corpus; returns how many
    /// entries were added. Zero means the corpus is exhausted.
    pub fn load_next_batch(&mut self) -> usize {
        let mut added = 0;
        for line in EMBEDDED_CORPUS.lines().skip(self.cursor) {
            if added == BATCH_SIZE {
                break;
            }
            self.cursor += 1;
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse_line(line, self.cursor)
                .expect("malformed record in embedded corpus. This is a library bug.");
            self.by_cas.insert(entry.cas.clone(), entry);
            added += 1;
        }
        debug!("loaded {} compounds (total {})", added, self.by_cas.len());
        added
    }

    /// Load the whole embedded corpus.
    pub fn load_all(&mut self) {
        while self.load_next_batch() > 0 {}
    }

    /// Load entries from an external tab-separated reader
    /// (`CAS\tSMILES\tname` per line, blank lines ignored).
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize, Error> {
        let mut added = 0;
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = parse_line(&line, lineno + 1)?;
            self.by_cas.insert(entry.cas.clone(), entry);
            added += 1;
        }
        Ok(added)
    }

    /// Load entries from a tab-separated file.
    pub fn load_from_file(&mut self, path: &Path) -> Result<usize, Error> {
        let reader = BufReader::new(File::open(path)?);
        self.load_from_reader(reader)
    }

    pub fn get(&self, cas: &str) -> Option<&CompoundEntry> {
        self.by_cas.get(cas)
    }

    pub fn len(&self) -> usize {
        self.by_cas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_cas.is_empty()
    }

    /// Entries in lexicographically sorted CAS order.
    pub fn iter(&self) -> impl Iterator<Item = &CompoundEntry> {
        self.by_cas.values()
    }
}

fn parse_line(line: &str, lineno: usize) -> Result<CompoundEntry, Error> {
    let mut fields = line.split('\t');
    let cas = fields.next().unwrap_or_default().trim();
    let smiles = fields.next().unwrap_or_default().trim();
    let name = fields.next().unwrap_or_default().trim();
    if cas.is_empty() || smiles.is_empty() {
        return Err(Error::Parse {
            line: lineno,
            details: "expected CAS\\tSMILES\\tname".to_string(),
        });
    }
    Ok(CompoundEntry {
        cas: cas.to_string(),
        smiles: smiles.to_string(),
        name: name.to_string(),
    })
}
