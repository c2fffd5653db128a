use std::process::{Child, ChildStdout, Command, Stdio};

use super::{ProcessError, StageSpec};

/// Runs a pipeline: one child per stage, stdout of each stage piped into the
/// stdin of the next, and every started child waited before returning.
#[derive(Debug, Clone, Default)]
pub struct PipelineExecutor;

impl PipelineExecutor {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, stages: &[StageSpec]) -> Result<(), ProcessError> {
        let mut children: Vec<(String, Child)> = Vec::with_capacity(stages.len());
        let mut upstream: Option<ChildStdout> = None;
        let mut failure: Option<ProcessError> = None;

        for (index, stage) in stages.iter().enumerate() {
            let stdin = match upstream.take() {
                Some(stdout) => Stdio::from(stdout),
                None if index == 0 => Stdio::inherit(),
                // The previous stage never started; give this one EOF.
                None => Stdio::null(),
            };

            match spawn_stage(stage, stdin) {
                Ok(mut child) => {
                    log::debug!("spawned {} (pid {})", stage.program(), child.id());
                    if !stage.is_last {
                        upstream = child.stdout.take();
                    }
                    children.push((stage.program().to_string(), child));
                }
                Err(e) => {
                    log::debug!("failed to spawn {}: {}", stage.program(), e);
                    if failure.is_none() {
                        failure = Some(ProcessError::SpawnFailed {
                            program: stage.program().to_string(),
                            source: e,
                        });
                    }
                }
            }
        }

        for (program, mut child) in children {
            match child.wait() {
                Ok(status) => log::debug!("{} exited with {}", program, status),
                Err(e) => log::warn!("failed to wait for {}: {}", program, e),
            }
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Starts one stage. The `Command`, and with it the shell's copy of the
/// stage's stdin pipe, is dropped on return. Pipes are opened close-on-exec,
/// so no stage holds an endpoint that belongs to another.
fn spawn_stage(stage: &StageSpec, stdin: Stdio) -> std::io::Result<Child> {
    let stdout = if stage.is_last {
        Stdio::inherit()
    } else {
        Stdio::piped()
    };

    let mut command = Command::new(stage.program());
    command
        .args(stage.args())
        .stdin(stdin)
        .stdout(stdout)
        .stderr(Stdio::inherit());
    command.spawn()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::split_stages;

    fn stages(line: &str) -> Vec<StageSpec> {
        let tokens: Vec<String> = line.split_whitespace().map(String::from).collect();
        split_stages(&tokens).expect("valid pipeline")
    }

    #[test]
    fn test_run_single_stage() {
        let executor = PipelineExecutor::new();
        assert!(executor.run(&stages("true")).is_ok());
    }

    #[test]
    fn test_exit_codes_are_not_errors() {
        let executor = PipelineExecutor::new();
        assert!(executor.run(&stages("false")).is_ok());
    }

    #[test]
    fn test_run_multi_stage() {
        let executor = PipelineExecutor::new();
        assert!(executor.run(&stages("echo hello | tr a-z A-Z | cat")).is_ok());
    }

    #[test]
    fn test_unknown_program() {
        let executor = PipelineExecutor::new();
        let result = executor.run(&stages("nonexistent_binary_xyz"));

        match result {
            Err(ProcessError::SpawnFailed { program, .. }) => {
                assert_eq!(program, "nonexistent_binary_xyz")
            }
            other => panic!("expected spawn failure, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_middle_stage_does_not_hang() {
        // `cat` would block forever if it were left waiting on a pipe.
        let executor = PipelineExecutor::new();
        let result = executor.run(&stages("echo hi | nonexistent_binary_xyz | cat"));

        assert!(matches!(
            result,
            Err(ProcessError::SpawnFailed { ref program, .. }) if program == "nonexistent_binary_xyz"
        ));
    }

    #[test]
    fn test_first_failure_is_reported() {
        let executor = PipelineExecutor::new();
        let result = executor.run(&stages("missing_one_xyz | missing_two_xyz"));

        assert!(matches!(
            result,
            Err(ProcessError::SpawnFailed { ref program, .. }) if program == "missing_one_xyz"
        ));
    }
}
