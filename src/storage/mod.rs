pub mod database;
pub mod entry;

pub use database::{validate_key, InitOutcome, Removal, Store};
pub use entry::Entry;
