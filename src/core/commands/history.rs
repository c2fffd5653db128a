use std::io::Write;

use super::CommandError;
use crate::input::History;

/// Prints `" n: line"` for every entry, most recent first.
pub fn list_history(history: &History, out: &mut dyn Write) -> Result<(), CommandError> {
    for (index, text) in history.list() {
        write!(out, "{:2}: {}", index, text)?;
    }
    out.flush()?;
    Ok(())
}
