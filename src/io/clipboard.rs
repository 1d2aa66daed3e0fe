use anyhow::{Result, anyhow};
use cli_clipboard::{ClipboardContext, ClipboardProvider};

fn set_clipboard(text: &str) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| anyhow!("clipboard unavailable: {e}"))?;
    ctx.set_contents(text.to_string())
        .map_err(|e| anyhow!("clipboard copy failed: {e}"))
}

/// Puts a rendered batch on the system clipboard and reports whether it
/// landed. With `fail_hard` unset a failure is only logged.
pub fn copy_to_clipboard(
    text: &str,
    fail_hard: bool,
) -> Result<bool> {
    match set_clipboard(text) {
        Ok(()) => Ok(true),
        Err(e) if fail_hard => Err(e),
        Err(e) => {
            tracing::warn!("{e:#}");
            Ok(false)
        }
    }
}
