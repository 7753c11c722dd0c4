use anyhow::Result;
use tracing::info;

use super::{write_entry, Outcome, Session};
use crate::prompt::Gate;
use crate::storage::validate_key;

/// Ask for content, then a key, and save after confirmation. Replacing an
/// existing entry needs an explicit "y".
pub fn interactive_add(session: &mut Session<'_>) -> Result<Outcome> {
    let Some(content) = session.prompt.ask_text("Content")? else {
        return cancelled(session);
    };
    let Some(key) = session.prompt.ask_text("Key")? else {
        return cancelled(session);
    };
    validate_key(&key)?;

    match session.store.get(&key)? {
        Some(existing) => {
            writeln!(session.out, "'{key}' already exists.")?;
            writeln!(session.out, "Current content:\n{existing}\n")?;
            writeln!(session.out, "New content:\n{content}\n")?;

            let answer = session.prompt.ask_yes_no(&format!("Overwrite '{key}'?"))?;
            if !answer.is_yes() {
                info!(key = %key, ?answer, "overwrite declined");
                writeln!(session.out, "Exiting without changes.")?;
                return Ok(Outcome::Aborted);
            }
        }
        None => {
            write_entry(session.out, &key, &content)?;

            let gate = session
                .prompt
                .ask_confirm_or_abort("Press Enter to save, Ctrl-C to cancel.")?;
            if gate == Gate::Cancelled {
                return cancelled(session);
            }
        }
    }

    session.store.put(&key, &content)?;
    info!(key = %key, "entry saved");
    writeln!(session.out, "Saved '{key}'.")?;

    Ok(Outcome::Done)
}

fn cancelled(session: &mut Session<'_>) -> Result<Outcome> {
    info!("interactive add cancelled");
    writeln!(session.out, "Cancelled, nothing saved.")?;
    Ok(Outcome::Aborted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_interactive_add_new_key() {
        let mut env = TestEnv::new();

        let outcome = env.run("ssh user@host\nlogin\n\n", interactive_add);

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(env.get("login"), Some("ssh user@host".to_string()));
        assert!(env.output().contains("login\n─────\nssh user@host\n"));
    }

    #[test]
    fn test_interactive_add_new_key_cancelled_at_gate() {
        let mut env = TestEnv::new();

        let outcome = env.run("content\nkey\n", interactive_add);

        assert_eq!(outcome, Outcome::Aborted);
        assert!(env.store.is_empty().unwrap());
    }

    #[test]
    fn test_interactive_add_cancelled_before_key() {
        let mut env = TestEnv::new();

        let outcome = env.run("content\n", interactive_add);

        assert_eq!(outcome, Outcome::Aborted);
        assert!(env.store.is_empty().unwrap());
        assert!(env.output().contains("Cancelled, nothing saved."));
    }

    #[test]
    fn test_interactive_add_overwrite_needs_explicit_yes() {
        let mut env = TestEnv::with_entries(&[("greeting", "hello")]);

        let outcome = env.run("goodbye\ngreeting\n\n", interactive_add);

        assert_eq!(outcome, Outcome::Aborted);
        assert_eq!(env.get("greeting"), Some("hello".to_string()));
        let output = env.output();
        assert!(output.contains("Current content:\nhello\n"));
        assert!(output.contains("New content:\ngoodbye\n"));
        assert!(output.contains("Exiting without changes."));
    }

    #[test]
    fn test_interactive_add_overwrite_confirmed() {
        let mut env = TestEnv::with_entries(&[("greeting", "hello")]);

        let outcome = env.run("goodbye\ngreeting\ny\n", interactive_add);

        assert_eq!(outcome, Outcome::Done);
        assert_eq!(env.get("greeting"), Some("goodbye".to_string()));
    }

    #[test]
    fn test_interactive_add_rejects_empty_key() {
        let mut env = TestEnv::new();

        let result = env.try_run("content\n\n\n", interactive_add);

        assert!(result.is_err());
        assert!(env.store.is_empty().unwrap());
    }
}
