//! Roster loading: fills a table with team records read from a CSV stream.

use crate::diagnostics::Diagnostics;
use crate::error::TableError;
use crate::hash_table::HashTable;
use crate::hashing::KeyHasher;
use crate::team::{parse_line, Line, TeamInfo};
use log::{info, warn};
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read roster line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("could not store roster line {line}")]
    Table {
        line: usize,
        #[source]
        source: TableError,
    },
}

/// What a load did, line by line.
#[derive(Debug, Default, Eq, PartialEq)]
pub struct LoadReport {
    /// Records stored under a new key.
    pub inserted: usize,
    /// Records whose key was already present; the later record wins.
    pub replaced: usize,
    /// Lines rejected by the parser.
    pub skipped: usize,
    /// Comment lines, in file order.
    pub comments: Vec<String>,
}

/// Reads `reader` into `table`.
///
/// The first line is a column header and is ignored. Each following line is
/// parsed; records are inserted under [`TeamInfo::make_key`], comments are
/// collected, and malformed lines are logged and skipped. A read error or a
/// full table aborts the load.
pub fn load<R, H, D>(reader: R, table: &mut HashTable<TeamInfo, H, D>) -> Result<LoadReport, LoadError>
where
    R: BufRead,
    H: KeyHasher,
    D: Diagnostics,
{
    let mut report = LoadReport::default();
    // line numbers are 1-based and include the header
    for (n, line) in reader.lines().enumerate().skip(1) {
        let line_no = n + 1;
        let line = line.map_err(|source| LoadError::Io {
            line: line_no,
            source,
        })?;
        match parse_line(&line) {
            Ok(Line::Record(team)) => {
                let key = team.make_key();
                match table.insert(&key, team) {
                    Ok(None) => report.inserted += 1,
                    Ok(Some(_)) => {
                        warn!("line {line_no}: duplicate key {key}, keeping the later record");
                        report.replaced += 1;
                    }
                    Err(e) => {
                        return Err(LoadError::Table {
                            line: line_no,
                            source: e.into(),
                        })
                    }
                }
            }
            Ok(Line::Comment(text)) => report.comments.push(text.to_owned()),
            Ok(Line::Blank) => {}
            Err(e) => {
                warn!("line {line_no}: {e}: {line}");
                report.skipped += 1;
            }
        }
    }
    info!(
        "loaded {} team records ({} replaced, {} skipped) into {} slots",
        report.inserted,
        report.replaced,
        report.skipped,
        table.capacity()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Silent;
    use std::io::Cursor;

    fn table(capacity: usize) -> HashTable<TeamInfo, crate::hashing::Polynomial, Silent> {
        HashTable::with_diagnostics(capacity, Silent).unwrap()
    }

    #[test]
    fn header_is_ignored() {
        let mut t = table(8);
        let csv = "WEST,City,Name,0,0,0,0,0\n";
        let report = load(Cursor::new(csv), &mut t).unwrap();
        assert_eq!(report, LoadReport::default());
        assert!(t.is_empty());
    }

    /// Invariant: a malformed line is counted and never reaches the table.
    #[test]
    fn malformed_lines_are_skipped() {
        let mut t = table(8);
        let csv = "conf,city,name,pts,w,l,t,gd\nWEST,Portland,Timbers,55\nWEST,Seattle,Sounders,60,17,8,9,20\n";
        let report = load(Cursor::new(csv), &mut t).unwrap();
        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(t.len(), 1);
        assert!(t.search("PORTLANDWEST").is_none());
        assert_eq!(t.search("SEATTLEWEST").map(|s| s.points), Some(60));
    }

    #[test]
    fn full_table_aborts_with_line_number() {
        let mut t = table(1);
        let csv = "header\nWEST,Portland,Timbers,55,17,13,4,3\nEAST,Toronto,FC,26,6,18,10,-27\n";
        match load(Cursor::new(csv), &mut t) {
            Err(LoadError::Table {
                line,
                source: TableError::TableFull { key },
            }) => {
                assert_eq!(line, 3);
                assert_eq!(key, "TORONTOEAST");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(t.len(), 1);
    }
}
