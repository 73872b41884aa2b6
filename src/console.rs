//! Interactive team lookup over any line source and sink.

use crate::diagnostics::Diagnostics;
use crate::hash_table::HashTable;
use crate::hashing::KeyHasher;
use crate::team::{lookup_key, TeamInfo};
use std::io::{self, BufRead, Write};

pub const CONFERENCE_PROMPT: &str = "Enter a conference (NWSL, EAST, or WEST): ";
pub const CITY_PROMPT: &str = "Enter a city: ";
pub const SEPARATOR: &str = "----------------------";
pub const NO_TEAM: &str = "ERROR: No team information for the selected team in conference.";

const QUIT: &str = "q";
const DUMP: &str = "?";

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Writes the lookup result block for one team, or the not-found block.
pub fn write_team<W: Write>(out: &mut W, team: Option<&TeamInfo>) -> io::Result<()> {
    match team {
        Some(t) => writeln!(out, "\n{t}")?,
        None => writeln!(out, "{NO_TEAM}")?,
    }
    writeln!(out, "{SEPARATOR}")
}

/// Runs the lookup loop until `q`, an empty conference, or end of input.
///
/// `?` prints the table dump. Any other conference is followed by a city
/// prompt; the pair is turned into a key and looked up.
pub fn run<R, W, H, D>(table: &HashTable<TeamInfo, H, D>, mut input: R, mut out: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    H: KeyHasher,
    D: Diagnostics,
{
    writeln!(out, "\nMenu:\n")?;
    writeln!(out, "Enter '{DUMP}' to display the keys for all the conference entries.")?;
    writeln!(out, "Enter '{QUIT}' to quit the program at any time.\n")?;

    loop {
        let Some(conference) = prompt(&mut input, &mut out, CONFERENCE_PROMPT)? else {
            break;
        };
        let conference = conference.trim();
        if conference.is_empty() || conference == QUIT {
            break;
        }
        if conference == DUMP {
            write!(out, "{}", table.dump())?;
            continue;
        }

        let Some(city) = prompt(&mut input, &mut out, CITY_PROMPT)? else {
            break;
        };
        let city = city.trim();
        if city == QUIT {
            break;
        }
        let key = lookup_key(conference, city);
        writeln!(out, "\nSearching hash table for {key}")?;
        write_team(&mut out, table.search(&key))?;
        writeln!(out)?;
    }
    writeln!(out, "\nExiting program.")?;
    out.flush()
}
