use atrium::config::ShellConfig;
use atrium::flags::Flags;
use atrium::process::signal;
use atrium::shell::Shell;
use std::env;

fn main() -> Result<(), atrium::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("atrium {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = ShellConfig::from_flags(&flags)?;
    atrium::logging::init(&config)?;
    signal::install_interrupt_handler()?;

    let mut shell = Shell::new(config)?;
    shell.run()
}
