use crate::error::ShellError;

/// Keeps the shell alive on Ctrl-C. The foreground stage still receives the
/// signal, since a caught disposition is reset to default on exec.
pub fn install_interrupt_handler() -> Result<(), ShellError> {
    ctrlc::set_handler(|| {
        log::debug!("interrupt received");
    })?;
    Ok(())
}
