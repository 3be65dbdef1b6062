//! Installation identity and calendar keying.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{Local, Utc};
use lumen_types::{DayKey, IdentityToken};
use thiserror::Error;
use uuid::Uuid;

use crate::util::atomic_write;

/// File holding the store-once identity token, inside the data directory.
const DEVICE_ID_FILE: &str = "device_id";

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("failed to read identity token from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to persist identity token to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Today's calendar-day key, in local time.
#[must_use]
pub fn today_key() -> DayKey {
    let formatted = Local::now().format("%Y-%m-%d").to_string();
    DayKey::new(formatted).expect("local date formats as YYYY-MM-DD")
}

/// Load the per-installation identity token, generating and persisting it
/// on first use.
///
/// The token is opaque: a v4 UUID joined to the generation time in unix
/// milliseconds. Once written it is reused for every seed derivation, so a
/// blank or unreadable-as-token file is replaced (with a warning) rather
/// than tolerated.
pub fn load_or_create_identity(data_dir: &Path) -> Result<IdentityToken, IdentityError> {
    let path = data_dir.join(DEVICE_ID_FILE);

    match fs::read_to_string(&path) {
        Ok(raw) => {
            if let Ok(token) = IdentityToken::new(raw.trim()) {
                return Ok(token);
            }
            tracing::warn!(path = %path.display(), "Blank identity token file; regenerating");
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => {
            return Err(IdentityError::Read {
                path,
                source: e,
            });
        }
    }

    let generated = format!("{}_{}", Uuid::new_v4(), Utc::now().timestamp_millis());
    let token = IdentityToken::new(&generated).expect("generated token is non-empty");
    atomic_write(&path, generated.as_bytes()).map_err(|source| IdentityError::Write {
        path,
        source,
    })?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{DEVICE_ID_FILE, load_or_create_identity, today_key};

    #[test]
    fn today_key_is_well_formed() {
        // Construction validates the YYYY-MM-DD shape.
        let key = today_key();
        assert_eq!(key.as_str().len(), 10);
    }

    #[test]
    fn identity_is_created_once_and_reused() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = load_or_create_identity(dir.path()).expect("create");
        let second = load_or_create_identity(dir.path()).expect("reload");
        assert_eq!(first, second);
        assert!(dir.path().join(DEVICE_ID_FILE).exists());
    }

    #[test]
    fn existing_token_is_trimmed_not_replaced() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(DEVICE_ID_FILE), "stable-token-123\n").expect("seed file");
        let token = load_or_create_identity(dir.path()).expect("load");
        assert_eq!(token.as_str(), "stable-token-123");
    }

    #[test]
    fn blank_token_file_is_regenerated() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join(DEVICE_ID_FILE), "   \n").expect("seed file");
        let token = load_or_create_identity(dir.path()).expect("load");
        assert!(!token.as_str().trim().is_empty());
    }
}
