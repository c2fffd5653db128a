use std::io::{BufRead, Write};

use rustyline::config::Behavior;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

#[derive(Debug, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    Interrupted,
    Eof,
}

/// Source of input lines for the shell loop.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError>;

    /// Lets an editor keep its own arrow-key recall in step with the shell.
    fn record(&mut self, _line: &str) {}
}

/// Interactive reader backed by rustyline. The prompt is drawn on the
/// terminal rather than stdout so piped program output stays clean.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, ShellError> {
        let config = rustyline::Config::builder()
            .behavior(Behavior::PreferTerm)
            .auto_add_history(false)
            .build();
        let editor = DefaultEditor::with_config(config)?;
        Ok(Self { editor })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }

    fn record(&mut self, line: &str) {
        if let Err(e) = self.editor.add_history_entry(line.trim_end()) {
            log::warn!("Couldn't add to editor history: {}", e);
        }
    }
}

/// Plain reader for non-terminal input. The prompt is written to `prompt_out`.
pub struct StreamReader<R, W> {
    input: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> StreamReader<R, W> {
    pub fn new(input: R, prompt_out: W) -> Self {
        Self { input, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineReader for StreamReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        if !prompt.is_empty() {
            write!(self.prompt_out, "{}", prompt)?;
            self.prompt_out.flush()?;
        }

        // Bytes that aren't UTF-8 become U+FFFD instead of ending the loop.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        Ok(ReadOutcome::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_stream_reader_lines_then_eof() -> Result<(), ShellError> {
        let mut prompt_out = Vec::new();
        let mut reader = StreamReader::new(Cursor::new("ls\npwd"), &mut prompt_out);

        assert_eq!(reader.read_line("$ ")?, ReadOutcome::Line("ls\n".to_string()));
        assert_eq!(reader.read_line("$ ")?, ReadOutcome::Line("pwd".to_string()));
        assert_eq!(reader.read_line("$ ")?, ReadOutcome::Eof);
        drop(reader);

        assert_eq!(String::from_utf8_lossy(&prompt_out), "$ $ $ ");
        Ok(())
    }

    #[test]
    fn test_stream_reader_replaces_invalid_utf8() -> Result<(), ShellError> {
        let input: &[u8] = b"echo \xff\necho after\n";
        let mut reader = StreamReader::new(Cursor::new(input), Vec::new());

        assert_eq!(
            reader.read_line("")?,
            ReadOutcome::Line("echo \u{FFFD}\n".to_string())
        );
        assert_eq!(
            reader.read_line("")?,
            ReadOutcome::Line("echo after\n".to_string())
        );
        assert_eq!(reader.read_line("")?, ReadOutcome::Eof);
        Ok(())
    }

    #[test]
    fn test_stream_reader_empty_prompt_writes_nothing() -> Result<(), ShellError> {
        let mut prompt_out = Vec::new();
        let mut reader = StreamReader::new(Cursor::new("\n"), &mut prompt_out);

        assert_eq!(reader.read_line("")?, ReadOutcome::Line("\n".to_string()));
        drop(reader);

        assert!(prompt_out.is_empty());
        Ok(())
    }
}
