//! Serializes usernames as a plain-text list and as a one-column CSV.
use crate::core::{Storage, Username};
use crate::utils::error::{PlannerError, Result};

pub const CSV_HEADER: &str = "username";

/// One username per line, each terminated by `\n`.
pub fn render_lines(usernames: &[Username]) -> String {
    let mut out = String::with_capacity(usernames.iter().map(|u| u.as_str().len() + 1).sum());
    for name in usernames {
        out.push_str(name.as_str());
        out.push('\n');
    }
    out
}

/// A `username` header followed by one single-field row per username. Rows end
/// in `\r\n` and fields are quoted only when they need it.
pub fn render_table(usernames: &[Username]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record([CSV_HEADER])?;
    for name in usernames {
        wtr.write_record([name.as_str()])?;
    }

    wtr.into_inner()
        .map_err(|e| PlannerError::IoError(e.into_error()))
}

pub async fn write_lines<S: Storage>(
    storage: &S,
    destination: &str,
    usernames: &[Username],
) -> Result<()> {
    tracing::debug!("Writing {} line(s) to {}", usernames.len(), destination);
    storage
        .write_file(destination, render_lines(usernames).as_bytes())
        .await
}

pub async fn write_table<S: Storage>(
    storage: &S,
    destination: &str,
    usernames: &[Username],
) -> Result<()> {
    tracing::debug!("Writing {} row(s) to {}", usernames.len(), destination);
    let data = render_table(usernames)?;
    storage.write_file(destination, &data).await
}
