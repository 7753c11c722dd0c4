use clap::{ArgAction, ArgGroup, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clipstash", version)]
#[command(about = "Keep named snippets of text and copy them to the clipboard on demand", long_about = None)]
#[command(group(
    ArgGroup::new("operation")
        .args(["add", "copy", "delete", "interactive", "list", "purge"])
        .multiple(false)
))]
pub struct Cli {
    /// Store CONTENT under KEY, confirming before an overwrite
    #[arg(short, long, num_args = 2, value_names = ["CONTENT", "KEY"])]
    pub add: Option<Vec<String>>,

    /// Show the entry for KEY and copy it to the clipboard
    #[arg(short, long, value_name = "KEY")]
    pub copy: Option<String>,

    /// Delete each KEY, asking first
    #[arg(short, long, num_args = 0.., value_name = "KEY")]
    pub delete: Option<Vec<String>>,

    /// Prompt for content and key, then save
    #[arg(short, long)]
    pub interactive: bool,

    /// Print every stored entry
    #[arg(short, long)]
    pub list: bool,

    /// Delete every entry after a single confirmation
    #[arg(short, long)]
    pub purge: bool,

    /// Store file to use [default: clipstash.db in the current directory]
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { content: String, key: String },
    Copy { key: String },
    Delete { keys: Vec<String> },
    Interactive,
    List,
    Purge,
}

impl Cli {
    /// The operation the flags ask for, or `None` when no flag was given.
    pub fn operation(&self) -> Option<Operation> {
        if let Some(args) = &self.add
            && let [content, key] = args.as_slice()
        {
            return Some(Operation::Add {
                content: content.clone(),
                key: key.clone(),
            });
        }
        if let Some(key) = &self.copy {
            return Some(Operation::Copy { key: key.clone() });
        }
        if let Some(keys) = &self.delete {
            return Some(Operation::Delete { keys: keys.clone() });
        }
        if self.interactive {
            return Some(Operation::Interactive);
        }
        if self.list {
            return Some(Operation::List);
        }
        if self.purge {
            return Some(Operation::Purge);
        }
        None
    }
}
