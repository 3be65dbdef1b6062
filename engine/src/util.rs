//! Atomic file write helper.
//!
//! Temp file + rename in the destination directory. Draw records and the
//! identity token are both regenerable or re-readable, so there is no
//! backup-and-restore machinery here - a failed rename just surfaces.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

pub(crate) fn atomic_write(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::atomic_write;

    #[test]
    fn write_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("record.json");

        atomic_write(&path, b"one").expect("first write");
        atomic_write(&path, b"two").expect("second write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "two");
    }
}
