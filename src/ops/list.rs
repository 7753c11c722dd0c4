use anyhow::Result;
use std::io::{self, Write};
use tracing::debug;

use super::{write_entry, Outcome, Session};
use crate::storage::Entry;

pub fn list(session: &mut Session<'_>) -> Result<Outcome> {
    let entries = session.store.entries()?;
    debug!(count = entries.len(), "listing entries");

    render_entries(session.out, &entries)?;
    Ok(Outcome::Done)
}

pub(crate) fn render_entries(out: &mut dyn Write, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(out, "The store is empty.");
    }

    for entry in entries {
        write_entry(out, &entry.key, &entry.content)?;
    }

    Ok(())
}
