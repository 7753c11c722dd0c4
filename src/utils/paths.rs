use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

/// File name of the store when neither `--store` nor the config names one.
/// Resolved against the invocation directory.
pub const DEFAULT_STORE_FILE: &str = "clipstash.db";

pub fn get_clipstash_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clipstash"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let dir = get_clipstash_dir()?;
    Ok(dir.join("config.toml"))
}

/// Pick the store location: explicit flag first, then config, then the
/// well-known file in the current directory.
pub fn resolve_store_path(flag: Option<&Path>, configured: Option<&Path>) -> PathBuf {
    flag.or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STORE_FILE))
}
