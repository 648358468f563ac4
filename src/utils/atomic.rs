use std::fs;
use std::path::{Path, PathBuf};

/// Writes `data` to `path` atomically by writing to a temporary sibling file
/// and then renaming it into place.
///
/// The temp file is created in the same directory as `path` to guarantee
/// same-filesystem rename semantics, so a reader never observes a partially
/// written file. Concurrent writers to the same path do not interleave
/// bytes; the last rename wins with one complete file.
///
/// # Arguments
///
/// * `path` - Destination path to replace.
/// * `data` - Full contents to write.
///
/// # Returns
///
/// * `Ok(())` - The file was replaced.
/// * `Err(std::io::Error)` - The temp file could not be written or the
///   rename failed; the temp file is removed on rename failure.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let temp_path = temp_sibling(path);

    fs::write(&temp_path, data)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        // Clean up the temp file on rename failure
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    Ok(())
}

/// Generates a unique temporary file path as a sibling of `path`.
///
/// A random suffix avoids collisions between concurrent writers targeting
/// the same destination.
fn temp_sibling(path: &Path) -> PathBuf {
    let random_suffix: u64 = rand::random();
    let file_name = path
        .file_name()
        .map_or_else(|| "file".to_string(), |n| n.to_string_lossy().to_string());

    let temp_name = format!(".{file_name}.{random_suffix:016x}.tmp");

    path.with_file_name(temp_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        atomic_write(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_atomic_write_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data.json");

        atomic_write(&path, b"data").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].file_name().to_string_lossy().as_ref(),
            "data.json"
        );
    }

    #[test]
    fn test_atomic_write_fails_without_parent_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("data.json");

        assert!(atomic_write(&path, b"data").is_err());
    }

    #[test]
    fn test_temp_sibling_stays_in_directory() {
        let path = Path::new("/tmp/site/data.json");
        let t1 = temp_sibling(path);
        let t2 = temp_sibling(path);

        assert_eq!(t1.parent().unwrap(), Path::new("/tmp/site"));
        let name = t1.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with('.'));
        assert!(name.ends_with(".tmp"));
        assert_ne!(t1, t2);
    }
}
