pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod ops;
pub mod prompt;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod test_utils;
