use crate::error::ShellError;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value: false,
            value: None,
        }
    }

    fn valued(short: &str, long: &str, description: &str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::switch("-q", "--quiet", "Do not print the prompt"),
        );
        flags.insert(
            "monochrome".to_string(),
            Flag::switch("-m", "--monochrome", "Disable colored output"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Enable debug output"),
        );
        flags.insert(
            "recall-depth".to_string(),
            Flag::valued("-r", "--recall-depth", "Maximum nesting of ! recalls"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            for flag in self.flags.values_mut() {
                if arg == &flag.short || arg == &flag.long {
                    if flag.takes_value {
                        if i + 1 < args.len() {
                            flag.value = Some(args[i + 1].clone());
                            i += 1;
                        } else {
                            return Err(ShellError::FlagError(format!(
                                "Flag {} requires a value",
                                arg
                            )));
                        }
                    } else {
                        flag.value = Some("true".to_string());
                    }
                }
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn print_help(&self) {
        println!("Usage: atrium [OPTIONS]");
        println!("\nOptions:");
        let mut flags: Vec<&Flag> = self.flags.values().collect();
        flags.sort_by(|a, b| a.long.cmp(&b.long));
        for flag in flags {
            println!("  {}, {:<15} {}", flag.short, flag.long, flag.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_short_and_long_switches() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--monochrome"]))?;

        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("monochrome"));
        assert!(!flags.is_set("debug"));
        Ok(())
    }

    #[test]
    fn test_value_flag() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["--recall-depth", "8", "-d"]))?;

        assert_eq!(flags.get_value("recall-depth").map(String::as_str), Some("8"));
        assert!(flags.is_set("debug"));
        Ok(())
    }

    #[test]
    fn test_value_flag_missing_value() {
        let mut flags = Flags::new();
        assert!(matches!(
            flags.parse(&args(&["-r"])),
            Err(ShellError::FlagError(_))
        ));
    }

    #[test]
    fn test_unknown_arguments_are_ignored() -> Result<(), ShellError> {
        let mut flags = Flags::new();
        flags.parse(&args(&["--frobnicate", "x"]))?;
        assert!(!flags.is_set("quiet"));
        Ok(())
    }
}
