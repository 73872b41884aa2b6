//! Loads a team roster into a hash table and answers lookups from stdin.

use anyhow::{Context, Result};
use clap::Parser;
use dh_table::logger::initialize_logger;
use dh_table::{console, roster, HashTable, TeamInfo, DEFAULT_CAPACITY};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Roster CSV: a header line, then one team per line. The default is the
    /// bundled sample, relative to the crate root.
    #[arg(short, long, default_value = "data/soccer2021.csv")]
    file: PathBuf,

    /// Number of hash table slots; twice the team count is recommended.
    #[arg(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: usize,
}

fn main() -> Result<()> {
    initialize_logger();
    let args = Args::parse();

    println!("\nHash Table ADT team lookup\n");
    let mut teams: HashTable<TeamInfo> = HashTable::new(args.capacity)
        .with_context(|| format!("could not create a hash table of {} slots", args.capacity))?;
    println!("Created a hash table of {} slots", teams.capacity());

    let file = File::open(&args.file)
        .with_context(|| format!("cannot open roster file {}", args.file.display()))?;
    println!("Inserting team info records into hash table...");
    let report = roster::load(BufReader::new(file), &mut teams)
        .with_context(|| format!("could not load {}", args.file.display()))?;
    for comment in &report.comments {
        println!("{comment}");
    }
    println!(
        "Inserted {} teams ({} lines skipped)",
        teams.len(),
        report.skipped
    );

    let stdin = io::stdin();
    console::run(&teams, stdin.lock(), io::stdout().lock()).context("console session failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Invariant: with no flags the binary reads the roster shipped in `data/`.
    #[test]
    fn default_file_is_bundled_sample() {
        let args = Args::parse_from(["team_lookup"]);
        assert_eq!(args.file, PathBuf::from("data/soccer2021.csv"));
        assert_eq!(args.capacity, DEFAULT_CAPACITY);
        assert!(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&args.file).is_file());
    }
}
