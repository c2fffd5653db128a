use super::CommandError;
use crate::input::{History, HistoryError};

/// Parses the operand of `! n`.
pub fn parse_index(args: &[String]) -> Result<usize, CommandError> {
    match args {
        [index] => index
            .parse::<usize>()
            .map_err(|_| CommandError::InvalidRecall(index.clone())),
        _ => Err(CommandError::InvalidRecall(args.join(" "))),
    }
}

/// Looks up the line `index` entries back. The most recent entry is the line
/// holding the recall itself, so counting starts one entry further back.
pub fn resolve(history: &History, index: usize) -> Result<&str, CommandError> {
    let out_of_range = || {
        CommandError::History(HistoryError::IndexOutOfRange {
            index,
            len: history.len().saturating_sub(1),
        })
    };

    let skipped = index.checked_add(1).ok_or_else(out_of_range)?;
    history.resolve(skipped).map_err(|_| out_of_range())
}
