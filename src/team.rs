//! Team records: the eight-field CSV schema, its line parser, and the table
//! key derived from a record.

use core::fmt;
use thiserror::Error;

/// Fields in one record line.
pub const NUM_TEAM_INFO_FIELDS: usize = 8;

pub const MAX_CONF_NAME: usize = 10;
pub const MAX_CITY_NAME: usize = 15;
pub const MAX_TEAM_NAME: usize = 25;

/// Marks a line that is displayed but not parsed.
pub const COMMENT_MARKER: &str = "//";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TeamInfo {
    pub conference: String,
    pub city: String,
    pub name: String,
    pub points: i32,
    pub wins: i32,
    pub losses: i32,
    pub ties: i32,
    pub goal_differential: i32,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ParseError {
    #[error("could not parse record: expected 8 fields, found {found}")]
    FieldCount { found: usize },

    #[error("could not parse record: {field} is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("could not parse record: {field} is longer than {max} characters: {value:?}")]
    FieldTooLong {
        field: &'static str,
        max: usize,
        value: String,
    },
}

/// Outcome of parsing one line of a roster file.
#[derive(Debug, Eq, PartialEq)]
pub enum Line<'a> {
    Record(TeamInfo),
    Comment(&'a str),
    Blank,
}

fn text_field(field: &'static str, raw: &str, max: usize) -> Result<String, ParseError> {
    let value = raw.trim();
    if value.len() > max {
        return Err(ParseError::FieldTooLong {
            field,
            max,
            value: value.to_owned(),
        });
    }
    Ok(value.to_owned())
}

fn int_field(field: &'static str, raw: &str) -> Result<i32, ParseError> {
    let value = raw.trim();
    value.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

/// Parses one line: `conference, city, name, points, wins, losses, ties, gd`.
///
/// A line containing `//` is a comment and blank lines are skipped; neither
/// produces a record.
pub fn parse_line(line: &str) -> Result<Line<'_>, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.contains(COMMENT_MARKER) {
        return Ok(Line::Comment(line));
    }
    if line.trim().is_empty() {
        return Ok(Line::Blank);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != NUM_TEAM_INFO_FIELDS {
        return Err(ParseError::FieldCount {
            found: fields.len(),
        });
    }
    Ok(Line::Record(TeamInfo {
        conference: text_field("conference", fields[0], MAX_CONF_NAME)?,
        city: text_field("city", fields[1], MAX_CITY_NAME)?,
        name: text_field("name", fields[2], MAX_TEAM_NAME)?,
        points: int_field("points", fields[3])?,
        wins: int_field("wins", fields[4])?,
        losses: int_field("losses", fields[5])?,
        ties: int_field("ties", fields[6])?,
        goal_differential: int_field("goal differential", fields[7])?,
    }))
}

/// Table key for a conference and city: `CITY` + `CONFERENCE`, upper-cased.
pub fn lookup_key(conference: &str, city: &str) -> String {
    let mut key = String::with_capacity(city.len() + conference.len());
    key.push_str(city);
    key.push_str(conference);
    key.make_ascii_uppercase();
    key
}

impl TeamInfo {
    /// Key this record is stored under, e.g. `PORTLANDWEST`.
    pub fn make_key(&self) -> String {
        lookup_key(&self.conference, &self.city)
    }
}

impl fmt::Display for TeamInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Team Information for the {}:", self.name)?;
        writeln!(f, "\tConference: {}", self.conference)?;
        writeln!(f, "\tCity: {}", self.city)?;
        writeln!(f, "\tPoints: {}", self.points)?;
        writeln!(
            f,
            "\tRecord (w-l-t): {}-{}-{}",
            self.wins, self.losses, self.ties
        )?;
        write!(f, "\tGoal differential: {}", self.goal_differential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timbers() -> TeamInfo {
        TeamInfo {
            conference: "WEST".into(),
            city: "Portland".into(),
            name: "Timbers".into(),
            points: 55,
            wins: 17,
            losses: 13,
            ties: 4,
            goal_differential: 3,
        }
    }

    #[test]
    fn parses_full_record() {
        let line = "WEST,Portland, Timbers, 55, 17, 13, 4, 3\n";
        assert_eq!(parse_line(line), Ok(Line::Record(timbers())));
    }

    #[test]
    fn comment_lines_pass_through() {
        assert_eq!(
            parse_line("// MLS Western Conference\r\n"),
            Ok(Line::Comment("// MLS Western Conference"))
        );
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(parse_line("\n"), Ok(Line::Blank));
        assert_eq!(parse_line("   "), Ok(Line::Blank));
    }

    /// Invariant: anything other than exactly eight fields is rejected.
    #[test]
    fn wrong_field_count_is_error() {
        assert_eq!(
            parse_line("WEST,Portland,Timbers,55"),
            Err(ParseError::FieldCount { found: 4 })
        );
        assert_eq!(
            parse_line("WEST,Portland,Timbers,55,17,13,4,3,9"),
            Err(ParseError::FieldCount { found: 9 })
        );
    }

    #[test]
    fn non_numeric_field_is_error() {
        let err = parse_line("WEST,Portland,Timbers,55,seventeen,13,4,3").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                field: "wins",
                value: "seventeen".into()
            }
        );
        assert!(parse_line("WEST,Portland,Timbers,55,17,13,4,").is_err());
    }

    #[test]
    fn negative_goal_differential_parses() {
        let Line::Record(t) = parse_line("EAST,Toronto,FC,26,6,18,10,-27").unwrap() else {
            panic!("expected record");
        };
        assert_eq!(t.goal_differential, -27);
    }

    #[test]
    fn overlong_city_is_error() {
        let err = parse_line("WEST,Llanfairpwllgwyngyll,Dragons,1,0,0,1,0").unwrap_err();
        assert!(matches!(err, ParseError::FieldTooLong { field: "city", max: 15, .. }));
    }

    /// Invariant: key is city then conference, upper-cased.
    #[test]
    fn key_concatenates_city_and_conference() {
        assert_eq!(timbers().make_key(), "PORTLANDWEST");
        assert_eq!(lookup_key("nwsl", "Kansas City"), "KANSAS CITYNWSL");
    }

    #[test]
    fn display_block() {
        let text = timbers().to_string();
        assert_eq!(
            text,
            "Team Information for the Timbers:\n\
             \tConference: WEST\n\
             \tCity: Portland\n\
             \tPoints: 55\n\
             \tRecord (w-l-t): 17-13-4\n\
             \tGoal differential: 3"
        );
    }
}
