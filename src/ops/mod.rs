//! The user-facing operations. Each one takes a [`Session`] and reports an
//! [`Outcome`]; I/O failures come back as `Err`.

pub mod add;
pub mod copy;
pub mod delete;
pub mod interactive;
pub mod list;
pub mod purge;

pub use add::add;
pub use copy::copy;
pub use delete::delete;
pub use interactive::interactive_add;
pub use list::list;
pub use purge::purge;

use anyhow::Result;
use std::io::{self, Write};

use crate::cli::Operation;
use crate::clipboard::Clipboard;
use crate::prompt::Prompt;
use crate::storage::Store;
use crate::utils::unicode::rule_for;

/// Everything an operation touches during one invocation.
pub struct Session<'a> {
    pub store: &'a mut Store,
    pub prompt: &'a mut dyn Prompt,
    pub clipboard: &'a mut dyn Clipboard,
    pub out: &'a mut dyn Write,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    NotFound,
    /// The operator declined or cancelled; nothing was changed.
    Aborted,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        self == Outcome::Done
    }

    /// Process exit status. I/O failures exit with 1 and clap usage errors
    /// with 2, so neither collides with these.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::Aborted => 3,
            Outcome::NotFound => 4,
        }
    }
}

/// Run exactly one operation. A failed `copy` is followed by the full
/// listing so the operator can spot the key they meant.
pub fn dispatch(session: &mut Session<'_>, operation: Operation) -> Result<Outcome> {
    match operation {
        Operation::Add { content, key } => add(session, &key, &content),
        Operation::Copy { key } => {
            let outcome = copy(session, &key)?;
            if outcome == Outcome::NotFound {
                writeln!(session.out, "\nStored entries:\n")?;
                list(session)?;
            }
            Ok(outcome)
        }
        Operation::Delete { keys } => delete(session, &keys),
        Operation::Interactive => interactive_add(session),
        Operation::List => list(session),
        Operation::Purge => purge(session),
    }
}

/// Key, a rule under it, then the content and a blank line.
pub(crate) fn write_entry(out: &mut dyn Write, key: &str, content: &str) -> io::Result<()> {
    writeln!(out, "{key}")?;
    writeln!(out, "{}", rule_for(key, 3))?;
    writeln!(out, "{content}")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_copy_missing_lists_entries() {
        let mut env = TestEnv::with_entries(&[("greeting", "hello")]);

        let outcome = env.run("", |s| {
            dispatch(s, Operation::Copy { key: "greting".to_string() })
        });

        assert_eq!(outcome, Outcome::NotFound);
        assert_eq!(
            env.output(),
            "No entry named 'greting'.\n\nStored entries:\n\ngreeting\n────────\nhello\n\n"
        );
        assert!(env.clipboard.copied.is_empty());
    }

    #[test]
    fn test_dispatch_add_then_list() {
        let mut env = TestEnv::new();

        let outcome = env.run("", |s| {
            dispatch(
                s,
                Operation::Add {
                    content: "hello world".to_string(),
                    key: "greeting".to_string(),
                },
            )
        });

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(env.get("greeting"), Some("hello world".to_string()));
        assert_eq!(env.run("", |s| dispatch(s, Operation::List)), Outcome::Done);
        assert!(env.output().ends_with("greeting\n────────\nhello world\n\n"));
    }

    #[test]
    fn test_exit_codes_are_distinct() {
        assert_eq!(Outcome::Done.exit_code(), 0);
        assert!(Outcome::Done.is_success());
        assert_ne!(Outcome::Aborted.exit_code(), Outcome::NotFound.exit_code());
        assert!(!Outcome::Aborted.is_success());
        assert!(!Outcome::NotFound.is_success());
    }
}
