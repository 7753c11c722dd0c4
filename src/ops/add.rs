use anyhow::Result;
use tracing::info;

use super::{Outcome, Session};
use crate::prompt::Gate;
use crate::storage::validate_key;

/// Store `content` under `key`. Overwriting an existing entry shows the old
/// content first and waits for the operator.
pub fn add(session: &mut Session<'_>, key: &str, content: &str) -> Result<Outcome> {
    validate_key(key)?;

    if let Some(existing) = session.store.get(key)? {
        writeln!(session.out, "'{key}' already exists with content:")?;
        writeln!(session.out, "{existing}")?;
        writeln!(session.out)?;

        let gate = session
            .prompt
            .ask_confirm_or_abort("Press Enter to overwrite, Ctrl-C to cancel.")?;
        if gate == Gate::Cancelled {
            info!(key, "add cancelled, existing entry kept");
            writeln!(session.out, "Aborted, '{key}' left unchanged.")?;
            return Ok(Outcome::Aborted);
        }
    }

    session.store.put(key, content)?;
    info!(key, "entry saved");
    writeln!(session.out, "Saved '{key}'.")?;

    Ok(Outcome::Done)
}
