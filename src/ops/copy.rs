use anyhow::Result;
use tracing::{info, warn};

use super::{write_entry, Outcome, Session};
use crate::prompt::Gate;

/// Show the entry for `key` and, once the operator confirms, put it on the
/// clipboard. A missing key leaves the clipboard alone.
pub fn copy(session: &mut Session<'_>, key: &str) -> Result<Outcome> {
    let Some(content) = session.store.get(key)? else {
        warn!(key, "copy requested for missing key");
        writeln!(session.out, "No entry named '{key}'.")?;
        return Ok(Outcome::NotFound);
    };

    write_entry(session.out, key, &content)?;

    let gate = session
        .prompt
        .ask_confirm_or_abort("Press Enter to copy to the clipboard, Ctrl-C to cancel.")?;
    if gate == Gate::Cancelled {
        info!(key, "copy cancelled");
        writeln!(session.out, "Aborted, clipboard unchanged.")?;
        return Ok(Outcome::Aborted);
    }

    session.clipboard.set_text(&content)?;
    info!(key, "entry copied to clipboard");
    writeln!(session.out, "Copied '{key}' to the clipboard.")?;

    Ok(Outcome::Done)
}
