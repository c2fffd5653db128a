pub mod history;
pub mod reader;
mod tokenize;

pub use history::{History, HistoryError};
pub use reader::{EditorReader, LineReader, ReadOutcome, StreamReader};
pub use tokenize::tokenize;
