use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::Context;

pub(crate) fn send_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut cmd = clipboard_cmd();
    let program = cmd.get_program().to_string_lossy().into_owned();
    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to start `{program}` to copy to the clipboard"))?;
    child
        .stdin
        .take()
        .context("clipboard command has no stdin")?
        .write_all(text.as_bytes())
        .with_context(|| format!("failed to write to `{program}`"))?;
    let exit_status = child
        .wait()
        .with_context(|| format!("failed to wait for `{program}` to finish"))?;
    if exit_status.success() {
        Ok(())
    } else {
        Err(anyhow::anyhow!("`{program}` exited with {exit_status}"))
    }
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
