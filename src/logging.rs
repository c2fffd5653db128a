use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use crate::config::ShellConfig;
use crate::error::ShellError;

/// Routes `log` records to stderr so they never mix with program output.
pub fn init(config: &ShellConfig) -> Result<(), ShellError> {
    let color = if config.monochrome {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let log_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .build();

    TermLogger::init(config.log_level(), log_config, TerminalMode::Stderr, color)?;
    Ok(())
}
