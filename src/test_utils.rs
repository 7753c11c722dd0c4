use anyhow::{bail, Result};
use std::io::Cursor;
use tempfile::TempDir;

use crate::clipboard::Clipboard;
use crate::ops::{Outcome, Session};
use crate::prompt::LinePrompt;
use crate::storage::Store;

/// Remembers what was copied instead of touching the host clipboard.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            bail!("Failed to access system clipboard");
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub store: Store,
    pub clipboard: RecordingClipboard,
    pub out: Vec<u8>,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let store = Store::open(&temp_dir.path().join("clipstash.db")).expect("failed to open store");
        Self {
            _temp_dir: temp_dir,
            store,
            clipboard: RecordingClipboard::default(),
            out: Vec::new(),
        }
    }

    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let mut env = Self::new();
        for (key, content) in entries {
            env.store.put(key, content).expect("failed to seed store");
        }
        env
    }

    /// Run an operation with `answers` as the operator's typed input.
    pub fn try_run<F>(&mut self, answers: &str, op: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Session<'_>) -> Result<Outcome>,
    {
        let mut prompt = LinePrompt::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new());
        let mut session = Session {
            store: &mut self.store,
            prompt: &mut prompt,
            clipboard: &mut self.clipboard,
            out: &mut self.out,
        };
        op(&mut session)
    }

    pub fn run<F>(&mut self, answers: &str, op: F) -> Outcome
    where
        F: FnOnce(&mut Session<'_>) -> Result<Outcome>,
    {
        self.try_run(answers, op).expect("operation failed")
    }

    pub fn output(&self) -> String {
        String::from_utf8(self.out.clone()).expect("output was not utf-8")
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.store.get(key).expect("failed to read store")
    }
}

pub fn keys(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}
