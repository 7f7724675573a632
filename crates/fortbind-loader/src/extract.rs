//! Materialization of artifact bytes as executable temp files.

use crate::{cleanup, ProvisionError, ProvisionResult};
use std::io::Write;
use std::path::PathBuf;

/// Extract `bytes` to a uniquely named temp file and return its path.
///
/// The file is created in the system temp directory with a name derived
/// from `file_name`, restricted to owner read/write/execute before any
/// content is written (the content is about to run as code in-process,
/// so no other principal may be able to touch it), and registered for
/// best-effort deletion at process exit. The unique name makes
/// collisions between independent extractions a non-issue.
///
/// # Errors
///
/// Returns [`ProvisionError::Io`] if the file cannot be created,
/// restricted, or written.
pub fn extract_artifact(file_name: &str, bytes: &[u8]) -> ProvisionResult<PathBuf> {
    let mut temp = tempfile::Builder::new()
        .prefix(file_name)
        .tempfile()
        .map_err(|e| ProvisionError::io(std::env::temp_dir(), e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o700))
            .map_err(|e| ProvisionError::io(temp.path(), e))?;
    }

    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .map_err(|e| ProvisionError::io(temp.path(), e))?;

    // Persist past this scope; deletion now happens at process exit
    // instead of on drop, and only best-effort.
    let (_file, path) = temp
        .keep()
        .map_err(|e| ProvisionError::io(e.file.path(), e.error))?;

    cleanup::register(path.clone());
    tracing::debug!(path = %path.display(), len = bytes.len(), "extracted native artifact");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_fidelity() {
        let bytes: Vec<u8> = (0..=255).cycle().take(4096).collect();
        let path = extract_artifact("libtest.so", &bytes).unwrap();
        let read_back = std::fs::read(&path).unwrap();
        assert_eq!(read_back, bytes, "extracted file must match artifact bytes");
        let _ = std::fs::remove_file(path);
    }

    #[cfg(unix)]
    #[test]
    fn test_owner_only_executable() {
        use std::os::unix::fs::PermissionsExt;

        let path = extract_artifact("libtest.so", b"payload").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(
            mode & 0o777,
            0o700,
            "artifact must be rwx for owner, nothing for group/others"
        );
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_repeated_extraction_yields_distinct_paths() {
        let first = extract_artifact("libtest.so", b"a").unwrap();
        let second = extract_artifact("libtest.so", b"b").unwrap();
        assert_ne!(first, second);
        let _ = std::fs::remove_file(first);
        let _ = std::fs::remove_file(second);
    }

    #[test]
    fn test_concurrent_extraction_is_independent() {
        let paths: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0u8..4)
                .map(|tag| scope.spawn(move || extract_artifact("libtest.so", &[tag]).unwrap()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("thread panicked"))
                .collect()
        });

        let unique: std::collections::HashSet<_> = paths.iter().cloned().collect();
        assert_eq!(
            unique.len(),
            paths.len(),
            "concurrent extractions must not collide on a path"
        );
        for (tag, path) in (0u8..).zip(&paths) {
            assert_eq!(std::fs::read(path).unwrap(), [tag]);
            let _ = std::fs::remove_file(path);
        }
    }

    #[test]
    fn test_name_derived_from_library() {
        let path = extract_artifact("libfortbindlapack.so", b"x").unwrap();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(
            name.starts_with("libfortbindlapack.so"),
            "temp name {name} should carry the library name"
        );
        let _ = std::fs::remove_file(path);
    }
}
