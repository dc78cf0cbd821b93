//! Turns a newline-delimited username list into normalized usernames.
use crate::core::{Username, UsernameList};
use crate::utils::error::{PlannerError, Result};

const UTF8_BOM: char = '\u{FEFF}';

/// Parses raw lines in order. Blank lines and lines starting with `#` (after
/// trimming) are skipped; every other line yields exactly one entry, so
/// duplicates survive.
pub fn read_usernames<I, S>(lines: I) -> UsernameList
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|raw| {
            let line = raw.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                None
            } else {
                Some(Username::normalize(line))
            }
        })
        .collect()
}

/// Parses a whole document. Lines end in `\n`, `\r\n` or a bare `\r`; the
/// empty piece between `\r` and `\n` is dropped as a blank line.
pub fn parse_usernames(text: &str) -> UsernameList {
    let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
    read_usernames(text.split(['\n', '\r']))
}

pub fn decode_list<'a>(path: &str, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| {
        tracing::debug!("{} is not UTF-8: {}", path, e);
        PlannerError::InvalidEncoding {
            path: path.to_string(),
        }
    })
}
