use std::io::Write;

mod cd;
mod history;
mod recall;

pub use cd::{change_directory, CdTarget};
pub use history::list_history;

use crate::config::ShellConfig;
use crate::input::{tokenize, History, HistoryError};
use crate::process::{split_stages, PipelineExecutor, ProcessError, StageSpec};

#[derive(Debug)]
pub enum CommandError {
    DirectoryChangeFailed {
        command: String,
        source: std::io::Error,
    },
    History(HistoryError),
    ProcessError(ProcessError),
    InvalidRecall(String),
    RecallDepthExceeded(usize),
    LineTooLong { len: usize, max: usize },
    IoError(std::io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::DirectoryChangeFailed { command, source } => {
                write!(f, "{}: unable to change directory: {}", command, source)
            }
            CommandError::History(err) => write!(f, "!: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
            CommandError::InvalidRecall(arg) => {
                write!(f, "!: expected a single history index, got '{}'", arg)
            }
            CommandError::RecallDepthExceeded(depth) => {
                write!(f, "!: recall nested deeper than {} levels", depth)
            }
            CommandError::LineTooLong { len, max } => {
                write!(f, "input line of {} bytes exceeds the {} byte limit", len, max)
            }
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

impl From<HistoryError> for CommandError {
    fn from(err: HistoryError) -> Self {
        CommandError::History(err)
    }
}

/// What the shell loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Stop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Empty,
    Exit,
    ChangeDir(CdTarget),
    History,
    Recall(usize),
    Pipeline(Vec<StageSpec>),
}

/// Decides what a token sequence means. Built-ins are matched on the first
/// token; anything else is a pipeline of external programs.
pub fn classify(tokens: &[String]) -> Result<Action, CommandError> {
    let Some((first, args)) = tokens.split_first() else {
        return Ok(Action::Empty);
    };

    match first.as_str() {
        "exit" => Ok(Action::Exit),
        "cd" => Ok(Action::ChangeDir(CdTarget::from_args(args))),
        "history" => Ok(Action::History),
        "!" => Ok(Action::Recall(recall::parse_index(args)?)),
        _ => Ok(Action::Pipeline(split_stages(tokens)?)),
    }
}

#[derive(Debug, Clone)]
pub struct CommandInterpreter {
    executor: PipelineExecutor,
    max_recall_depth: usize,
}

impl CommandInterpreter {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            executor: PipelineExecutor::new(),
            max_recall_depth: config.max_recall_depth,
        }
    }

    /// Runs one input line. The line must already be the most recent entry
    /// of `history`; listings and other chatter go to `diag`.
    pub fn execute_line(
        &self,
        line: &str,
        history: &History,
        diag: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        self.execute_at_depth(line, history, diag, 0)
    }

    fn execute_at_depth(
        &self,
        line: &str,
        history: &History,
        diag: &mut dyn Write,
        depth: usize,
    ) -> Result<Outcome, CommandError> {
        let action = classify(&tokenize(line))?;
        log::debug!("depth {}: {:?}", depth, action);

        match action {
            Action::Empty => Ok(Outcome::Continue),
            Action::Exit => Ok(Outcome::Stop),
            Action::ChangeDir(target) => {
                change_directory(&target)?;
                Ok(Outcome::Continue)
            }
            Action::History => {
                list_history(history, diag)?;
                Ok(Outcome::Continue)
            }
            Action::Recall(index) => {
                if depth >= self.max_recall_depth {
                    return Err(CommandError::RecallDepthExceeded(self.max_recall_depth));
                }
                let recalled = recall::resolve(history, index)?;
                log::debug!("recalled {:?}", recalled);
                self.execute_at_depth(recalled, history, diag, depth + 1)
            }
            Action::Pipeline(stages) => {
                self.executor.run(&stages)?;
                Ok(Outcome::Continue)
            }
        }
    }
}
