use std::io::Write;
use std::process::{Command, Stdio};

use tracing::warn;

use crate::error::Result;

/// Hand text to the system print spooler without waiting for it.
///
/// Printing tracks no return value; failures are logged and otherwise
/// ignored.
pub fn dispatch(text: String) {
    tokio::task::spawn_blocking(move || {
        if let Err(err) = spool(&text) {
            warn!("Print failed: {err}");
        }
    });
}

fn spool(text: &str) -> Result<()> {
    let mut child = Command::new("lpr")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    // Take and drop stdin so the spooler sees EOF before we wait on it
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    child.wait()?;
    Ok(())
}
