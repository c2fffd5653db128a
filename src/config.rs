use crate::error::ShellError;
use crate::flags::Flags;

/// Longest accepted input line, in bytes.
pub const MAX_COMMAND_LEN: usize = 4096;

/// How many `!` recalls may nest before the chain is cut off.
pub const DEFAULT_RECALL_DEPTH: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub quiet: bool,
    pub monochrome: bool,
    pub debug: bool,
    pub max_recall_depth: usize,
    pub max_line_len: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            monochrome: false,
            debug: false,
            max_recall_depth: DEFAULT_RECALL_DEPTH,
            max_line_len: MAX_COMMAND_LEN,
        }
    }
}

impl ShellConfig {
    pub fn from_flags(flags: &Flags) -> Result<Self, ShellError> {
        let max_recall_depth = match flags.get_value("recall-depth") {
            Some(value) => value.parse::<usize>().map_err(|_| {
                ShellError::FlagError(format!("invalid recall depth: {}", value))
            })?,
            None => DEFAULT_RECALL_DEPTH,
        };

        Ok(Self {
            quiet: flags.is_set("quiet"),
            monochrome: flags.is_set("monochrome"),
            debug: flags.is_set("debug"),
            max_recall_depth,
            ..Self::default()
        })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(args: &[&str]) -> Result<Flags, ShellError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut flags = Flags::new();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_defaults() -> Result<(), ShellError> {
        let config = ShellConfig::from_flags(&parsed(&[])?)?;
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.max_line_len, MAX_COMMAND_LEN);
        assert_eq!(config.log_level(), log::LevelFilter::Warn);
        Ok(())
    }

    #[test]
    fn test_flags_map_to_config() -> Result<(), ShellError> {
        let config = ShellConfig::from_flags(&parsed(&["-q", "-m", "--debug", "-r", "4"])?)?;
        assert!(config.quiet);
        assert!(config.monochrome);
        assert!(config.debug);
        assert_eq!(config.max_recall_depth, 4);
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        Ok(())
    }

    #[test]
    fn test_bad_recall_depth() -> Result<(), ShellError> {
        let flags = parsed(&["--recall-depth", "deep"])?;
        assert!(matches!(
            ShellConfig::from_flags(&flags),
            Err(ShellError::FlagError(_))
        ));
        Ok(())
    }
}
