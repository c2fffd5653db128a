use std::io::{self, IsTerminal, Write};

use crate::{
    config::ShellConfig,
    core::commands::{CommandError, CommandInterpreter, Outcome},
    error::ShellError,
    input::{EditorReader, History, LineReader, ReadOutcome, StreamReader},
    prompt::PromptRenderer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    Running,
    Stopped,
}

pub struct Shell {
    config: ShellConfig,
    history: History,
    interpreter: CommandInterpreter,
    prompt: PromptRenderer,
    reader: Box<dyn LineReader>,
    diag: Box<dyn Write>,
    state: ShellState,
}

impl Shell {
    /// Uses a line editor when stdin is a terminal, plain buffered reads
    /// otherwise.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let reader: Box<dyn LineReader> = if io::stdin().is_terminal() {
            Box::new(EditorReader::new()?)
        } else {
            Box::new(StreamReader::new(io::stdin().lock(), io::stderr()))
        };
        Ok(Self::with_io(config, reader, Box::new(io::stderr())))
    }

    pub fn with_io(config: ShellConfig, reader: Box<dyn LineReader>, diag: Box<dyn Write>) -> Self {
        let interpreter = CommandInterpreter::new(&config);
        let prompt = PromptRenderer::new(config.quiet, config.monochrome);

        Shell {
            config,
            history: History::new(),
            interpreter,
            prompt,
            reader,
            diag,
            state: ShellState::Running,
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        while self.state == ShellState::Running {
            let prompt = self.prompt.render();
            match self.reader.read_line(&prompt)? {
                ReadOutcome::Line(line) => {
                    if let Err(e) = self.process_line(&line) {
                        self.report(&e);
                    }
                }
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => {
                    log::debug!("end of input");
                    self.state = ShellState::Stopped;
                }
            }
        }

        self.history.clear();
        Ok(())
    }

    fn process_line(&mut self, line: &str) -> Result<(), CommandError> {
        if line.len() > self.config.max_line_len {
            return Err(CommandError::LineTooLong {
                len: line.len(),
                max: self.config.max_line_len,
            });
        }

        self.history.append(line);
        self.reader.record(line);

        let outcome = self
            .interpreter
            .execute_line(line, &self.history, self.diag.as_mut())?;
        if outcome == Outcome::Stop {
            self.state = ShellState::Stopped;
        }
        Ok(())
    }

    fn report(&mut self, err: &CommandError) {
        log::debug!("command failed: {:?}", err);
        if let Err(e) = writeln!(self.diag, "{}", err) {
            log::warn!("Couldn't report error: {}", e);
        }
    }
}
