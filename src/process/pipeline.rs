use super::ProcessError;

pub const PIPE: &str = "|";

/// One external program in a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSpec {
    pub argv: Vec<String>,
    pub is_last: bool,
}

impl StageSpec {
    pub fn program(&self) -> &str {
        self.argv.first().map(String::as_str).unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or_default()
    }
}

/// Splits tokens on `|`. Every stage must have at least one token, so a
/// leading, trailing or doubled separator rejects the whole line.
pub fn split_stages(tokens: &[String]) -> Result<Vec<StageSpec>, ProcessError> {
    let groups: Vec<&[String]> = tokens.split(|token| token == PIPE).collect();
    if groups.iter().any(|group| group.is_empty()) {
        return Err(ProcessError::MalformedPipeline);
    }

    let last = groups.len() - 1;
    Ok(groups
        .into_iter()
        .enumerate()
        .map(|(index, group)| StageSpec {
            argv: group.to_vec(),
            is_last: index == last,
        })
        .collect())
}
