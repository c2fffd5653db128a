use std::collections::VecDeque;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    text: String,
}

impl HistoryEntry {
    /// Wraps a raw input line, making sure it ends with a newline.
    fn new(text: &str) -> Self {
        let mut text = text.to_owned();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Self { text }
    }

    fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::IndexOutOfRange { index, len } => {
                write!(f, "history index {} out of range ({} entries)", index, len)
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Every line the shell has read, most recent first.
#[derive(Debug, Default)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    pub fn append(&mut self, text: &str) {
        self.entries.push_front(HistoryEntry::new(text));
    }

    /// Entries paired with their reverse index, 0 being the most recent.
    pub fn list(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.text()))
    }

    pub fn resolve(&self, index: usize) -> Result<&str, HistoryError> {
        self.entries
            .get(index)
            .map(HistoryEntry::text)
            .ok_or(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
