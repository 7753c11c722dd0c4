use anyhow::{Context, Result};
use std::time::Duration;

/// Anything that can take text and put it on a clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The host clipboard, through arboard.
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard {
    hold: Option<Duration>,
}

impl SystemClipboard {
    /// On X11/Wayland the writing process owns the selection, so the copied
    /// text disappears when we exit. Holding keeps serving it for up to
    /// `hold`, or until another application takes ownership.
    pub fn with_hold(hold: Duration) -> Self {
        Self {
            hold: (!hold.is_zero()).then_some(hold),
        }
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text, self.hold)
    }
}

/// Put `text` on the host clipboard. With `hold`, block until another
/// application takes the selection or `hold` runs out, whichever comes first;
/// without it, return as soon as the text is set.
#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
))]
pub fn copy_to_clipboard(text: &str, hold: Option<Duration>) -> Result<()> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access system clipboard")?;

    match hold {
        Some(hold) => clipboard
            .set()
            .wait_until(Instant::now() + hold)
            .text(text)
            .context("Failed to copy text to clipboard")?,
        None => clipboard
            .set_text(text)
            .context("Failed to copy text to clipboard")?,
    }

    Ok(())
}

/// Put `text` on the host clipboard. The clipboard here outlives the
/// process, so `hold` is ignored.
#[cfg(not(all(
    unix,
    not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
)))]
pub fn copy_to_clipboard(text: &str, _hold: Option<Duration>) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().context("Failed to access system clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to copy text to clipboard")?;
    Ok(())
}
