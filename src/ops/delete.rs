use anyhow::Result;
use tracing::{info, warn};

use super::list::render_entries;
use super::{Outcome, Session};
use crate::storage::Removal;

/// Ask about each key in turn and remove the confirmed ones. A missing key
/// is reported and skipped; the rest of the batch still runs.
pub fn delete(session: &mut Session<'_>, keys: &[String]) -> Result<Outcome> {
    if keys.is_empty() {
        writeln!(session.out, "No keys given, nothing to delete.")?;
        return Ok(Outcome::Done);
    }

    let mut missing = Vec::new();

    for key in keys {
        let answer = session.prompt.ask_yes_no(&format!("Delete '{key}'?"))?;
        if !answer.is_yes() {
            info!(key = %key, ?answer, "deletion declined");
            writeln!(session.out, "Kept '{key}'.")?;
            continue;
        }

        match session.store.remove(key)? {
            Removal::Removed => {
                info!(key = %key, "entry deleted");
                writeln!(session.out, "Deleted '{key}'.")?;
            }
            Removal::NotFound => {
                warn!(key = %key, "delete requested for missing key");
                writeln!(session.out, "No entry named '{key}'.")?;
                missing.push(key);
            }
        }
    }

    if missing.is_empty() {
        return Ok(Outcome::Done);
    }

    writeln!(session.out, "\nStored entries:\n")?;
    render_entries(session.out, &session.store.entries()?)?;

    Ok(Outcome::NotFound)
}
