use std::collections::HashMap;
use std::path::Path;

use crate::{Error, Result};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// One data row of the edition registry. Only the first two columns are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionRecord {
    pub edition: String,
    pub link: String,
}

/// Reads the registry at `path` and returns the edition -> link lookup.
pub async fn read_registry(path: &Path) -> Result<HashMap<String, String>> {
    let text = match tokio::fs::read_to_string(path).await {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::RegistryMissing(path.to_path_buf()))
        }
        Err(e) => return Err(e.into()),
    };
    Ok(build_lookup(parse_records(&text)))
}

/// Parses the registry text, skipping the header and blank lines.
/// Malformed rows never fail, missing fields come out as empty strings.
pub fn parse_records(text: &str) -> Vec<EditionRecord> {
    text.lines()
        .skip(1)
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let [edition, link] = first_two_fields(line);
            EditionRecord { edition, link }
        })
        .collect()
}

/// Later records win over earlier ones with the same edition.
pub fn build_lookup(records: Vec<EditionRecord>) -> HashMap<String, String> {
    records
        .into_iter()
        .map(|rec| (rec.edition, rec.link))
        .collect()
}

/// Extracts the first two fields of a line and stops there.
/// Quoted fields may hold the delimiter, `""` inside quotes is a literal quote.
fn first_two_fields(line: &str) -> [String; 2] {
    let mut fields: [String; 2] = Default::default();
    let mut idx = 0;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes => {
                if chars.peek() == Some(&QUOTE) {
                    fields[idx].push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            QUOTE => in_quotes = true,
            DELIMITER if !in_quotes => {
                idx += 1;
                if idx == fields.len() {
                    break;
                }
            }
            _ => fields[idx].push(c),
        }
    }
    fields
}
