use std::fmt;

pub mod executor;
pub mod pipeline;
pub mod signal;

pub use executor::PipelineExecutor;
pub use pipeline::{split_stages, StageSpec};

#[derive(Debug)]
pub enum ProcessError {
    MalformedPipeline,
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::MalformedPipeline => {
                write!(f, "malformed pipeline: empty command between pipes")
            }
            ProcessError::SpawnFailed { program, source } => {
                write!(f, "Unable to execute {}: {}", program, source)
            }
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::SpawnFailed { source, .. } => Some(source),
            ProcessError::MalformedPipeline => None,
        }
    }
}
