use std::env;
use std::path::PathBuf;

use super::CommandError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CdTarget {
    Home,
    Path(String),
}

impl CdTarget {
    /// `cd` and `cd ~` go home; otherwise the first operand is the path.
    pub fn from_args(args: &[String]) -> Self {
        match args.first().map(String::as_str) {
            None | Some("~") => CdTarget::Home,
            Some(path) => CdTarget::Path(path.to_string()),
        }
    }
}

pub fn change_directory(target: &CdTarget) -> Result<(), CommandError> {
    let path = match target {
        CdTarget::Home => dirs::home_dir().ok_or_else(|| CommandError::DirectoryChangeFailed {
            command: "cd".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found"),
        })?,
        CdTarget::Path(path) => PathBuf::from(path),
    };

    env::set_current_dir(&path).map_err(|e| CommandError::DirectoryChangeFailed {
        command: "cd".to_string(),
        source: e,
    })?;
    log::debug!("working directory is now {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_target_home() {
        assert_eq!(CdTarget::from_args(&[]), CdTarget::Home);
        assert_eq!(CdTarget::from_args(&args(&["~"])), CdTarget::Home);
    }

    #[test]
    fn test_target_path_ignores_extra_operands() {
        assert_eq!(
            CdTarget::from_args(&args(&["/tmp", "extra"])),
            CdTarget::Path("/tmp".to_string())
        );
    }

    #[test]
    fn test_cd_invalid() {
        let before = env::current_dir().expect("cwd");
        let result = change_directory(&CdTarget::Path("/nonexistent/path/xyz".to_string()));

        assert!(matches!(
            result,
            Err(CommandError::DirectoryChangeFailed { ref command, .. }) if command == "cd"
        ));
        assert_eq!(env::current_dir().expect("cwd"), before);
    }
}
