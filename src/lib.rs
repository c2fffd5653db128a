pub mod config;
pub mod error;
pub mod flags;
pub mod logging;
pub mod prompt;
pub mod shell;

pub mod core;
pub mod input;
pub mod process;
