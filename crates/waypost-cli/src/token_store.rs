//! Stored bearer token.
//!
//! The token lives in a plain file next to the config
//! (`<config dir>/waypost/token`). Sign-in writes it, sign-out and any
//! forced revocation delete it.

use std::path::PathBuf;

use anyhow::{Context, Result};

fn token_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("could not determine the platform config directory")?
        .join("waypost");
    Ok(dir.join("token"))
}

/// Reads the stored token, if any.
pub fn load() -> Result<Option<String>> {
    let path = token_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let token = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    Ok(Some(token.to_string()))
}

/// Stores a token, creating the directory when needed.
pub fn store(token: &str) -> Result<()> {
    let path = token_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, token)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("Token stored at {}", path.display());
    Ok(())
}

/// Deletes the stored token. Succeeds when no token exists.
pub fn clear() -> Result<()> {
    let path = token_path()?;
    match std::fs::remove_file(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
    }
}
