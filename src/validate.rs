//! Batch validation of the fragmenter against a compound database.
//!
//! Every compound yields exactly one record: either its full decomposition
//! (complete or not) or the parse failure that stopped it. A single bad
//! compound never aborts the run. The report is one tab-separated line per
//! compound, sorted before writing.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::{debug, warn};

use crate::db::{CompoundDatabase, CompoundEntry};
use crate::fragment::{self, Fragmentation, MatchOptions};
use crate::smiles;

pub const DEFAULT_REPORT_PATH: &str = "Data/joback_log.txt";

/// What happened to one compound.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The structure parsed; the fragmentation result says whether the
    /// decomposition covered every heavy atom.
    Decomposed(Fragmentation),
    /// The structure could not be parsed.
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct Record {
    pub cas: String,
    pub smiles: String,
    pub outcome: Outcome,
}

impl Record {
    /// Report line for this record (no trailing newline).
    pub fn line(&self) -> String {
        match &self.outcome {
            Outcome::Decomposed(frag) => format!(
                "{}\t{}\t{}\t{}",
                frag.complete, self.cas, self.smiles, frag.counts
            ),
            Outcome::Failed(message) => {
                format!("{}\t{}\t{}", self.cas, self.smiles, message)
            }
        }
    }
}

/// Fragment one compound. Matches are counted independently (no merging),
/// which surfaces pattern overlaps as count anomalies in the report.
pub fn validate_entry(entry: &CompoundEntry) -> Record {
    let outcome = match smiles::parse(&entry.smiles) {
        Ok(mol) => {
            let frag = fragment::fragment(&mol, &MatchOptions { deduplicate: false });
            if !frag.complete {
                debug!("{} ({}): {}", entry.cas, entry.smiles, frag.detail);
            }
            Outcome::Decomposed(frag)
        }
        Err(err) => {
            warn!("{} ({}): {}", entry.cas, entry.smiles, err);
            Outcome::Failed(err.to_string())
        }
    };
    Record {
        cas: entry.cas.clone(),
        smiles: entry.smiles.clone(),
        outcome,
    }
}

/// Fragment every compound in the database.
pub fn validate_database(db: &CompoundDatabase) -> Vec<Record> {
    db.iter().map(validate_entry).collect()
}

/// Report lines, lexicographically sorted.
pub fn report_lines(records: &[Record]) -> Vec<String> {
    let mut lines: Vec<String> = records.iter().map(Record::line).collect();
    lines.sort_unstable();
    lines
}

pub fn write_report<W: Write>(mut writer: W, records: &[Record]) -> io::Result<()> {
    for line in report_lines(records) {
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

/// Write the report to `path`, overwriting any previous run and creating
/// the parent directory if needed.
pub fn write_report_file(path: &Path, records: &[Record]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, records)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_db() -> CompoundDatabase {
        let mut db = CompoundDatabase::embedded();
        db.load_from_reader(
            "67-64-1\tCC(=O)C\tacetone\n\
             7732-18-5\tO\twater\n\
             102-54-5\t[cH-]1cccc1.[cH-]1cccc1.[Fe+2]\tferrocene\n\
             64-17-5\tCCO\tethanol\n"
                .as_bytes(),
        )
        .unwrap();
        db
    }

    #[test]
    fn one_record_per_compound() {
        let records = validate_database(&test_db());
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn record_lines() {
        let records = validate_database(&test_db());
        let by_cas = |cas: &str| records.iter().find(|r| r.cas == cas).unwrap();

        let acetone = by_cas("67-64-1");
        assert_eq!(
            acetone.line(),
            "true\t67-64-1\tCC(=O)C\t{-CH3: 2, >C=O (non-ring): 1}"
        );

        let water = by_cas("7732-18-5");
        assert!(water.line().starts_with("false\t7732-18-5\tO\t"));

        let ferrocene = by_cas("102-54-5");
        assert!(matches!(ferrocene.outcome, Outcome::Failed(_)));
        assert!(ferrocene.line().contains("Fe"));
    }

    #[test]
    fn report_is_sorted() {
        let records = validate_database(&test_db());
        let lines = report_lines(&records);
        let mut sorted = lines.clone();
        sorted.sort_unstable();
        assert_eq!(lines, sorted);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn write_report_to_buffer() {
        let records = validate_database(&test_db());
        let mut buffer = Vec::new();
        write_report(&mut buffer, &records).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert!(text.ends_with('\n'));
    }
}
