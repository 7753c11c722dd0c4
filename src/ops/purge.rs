use anyhow::Result;
use tracing::info;

use super::{Outcome, Session};

/// Wipe the whole store behind a single yes/no question. Anything but an
/// explicit yes keeps every entry.
pub fn purge(session: &mut Session<'_>) -> Result<Outcome> {
    let answer = session
        .prompt
        .ask_yes_no("Delete ALL entries? This cannot be undone.")?;
    if !answer.is_yes() {
        info!(?answer, "purge declined");
        writeln!(session.out, "Purge cancelled, nothing deleted.")?;
        return Ok(Outcome::Aborted);
    }

    let count = session.store.clear()?;
    info!(count, "store purged");

    if count == 0 {
        writeln!(session.out, "The store was already empty, nothing to delete.")?;
    } else {
        let noun = if count == 1 { "entry" } else { "entries" };
        writeln!(session.out, "Deleted {count} {noun}.")?;
    }

    Ok(Outcome::Done)
}
