// Console session tests: scripted stdin, captured stdout.
use dh_table::console::{run, CITY_PROMPT, CONFERENCE_PROMPT, NO_TEAM, SEPARATOR};
use dh_table::roster::load;
use dh_table::{HashTable, Polynomial, Silent, TeamInfo, DEFAULT_CAPACITY};
use std::io::Cursor;

const SAMPLE: &str = include_str!("../data/soccer2021.csv");

fn loaded() -> HashTable<TeamInfo, Polynomial, Silent> {
    let mut t = HashTable::with_diagnostics(DEFAULT_CAPACITY, Silent).expect("table");
    load(Cursor::new(SAMPLE), &mut t).expect("load");
    t
}

fn session(table: &HashTable<TeamInfo, Polynomial, Silent>, input: &str) -> String {
    let mut out = Vec::new();
    run(table, Cursor::new(input), &mut out).expect("session");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn lookup_hit_prints_team_block() {
    let t = loaded();
    let out = session(&t, "WEST\nPortland\nq\n");
    assert!(out.contains(CONFERENCE_PROMPT));
    assert!(out.contains(CITY_PROMPT));
    assert!(out.contains("Searching hash table for PORTLANDWEST"));
    assert!(out.contains("Team Information for the Timbers:"));
    assert!(out.contains("\tRecord (w-l-t): 17-13-4"));
    assert!(out.contains(SEPARATOR));
    assert!(out.trim_end().ends_with("Exiting program."));
}

#[test]
fn lookup_miss_prints_error_block() {
    let t = loaded();
    let out = session(&t, "EAST\nPortland\n\n");
    assert!(out.contains("Searching hash table for PORTLANDEAST"));
    assert!(out.contains(NO_TEAM));
    assert!(!out.contains("Team Information"));
}

// Test: input case does not matter because the key is upper-cased.
#[test]
fn lookup_is_case_insensitive() {
    let t = loaded();
    let out = session(&t, "nwsl\ntacoma\nq\n");
    assert!(out.contains("Team Information for the OL Reign:"));
}

// Test: '?' dumps every slot and the loop continues.
#[test]
fn question_mark_dumps_table_then_continues() {
    let t = loaded();
    let out = session(&t, "?\nEAST\nToronto\nq\n");
    assert!(out.contains("Hash table contains 32 entries in 90 slots:"));
    assert_eq!(out.matches("\tHash Table[").count(), 90);
    assert!(out.contains("Team Information for the FC:"));
    assert_eq!(out.matches(CONFERENCE_PROMPT).count(), 3);
}

#[test]
fn several_lookups_in_one_session() {
    let t = loaded();
    let out = session(&t, "WEST\nSeattle\nEAST\nNew England\nWEST\nNowhere\nq\n");
    assert!(out.contains("Team Information for the Sounders:"));
    assert!(out.contains("Team Information for the Revolution:"));
    assert_eq!(out.matches(NO_TEAM).count(), 1);
    assert_eq!(out.matches(SEPARATOR).count(), 3);
}

// Test: end of input ends the session cleanly, even mid-prompt.
#[test]
fn eof_ends_session() {
    let t = loaded();
    assert!(session(&t, "").ends_with("Exiting program.\n"));
    let out = session(&t, "WEST\n");
    assert!(out.contains(CITY_PROMPT));
    assert!(!out.contains("Searching"));
}
