//! Best-effort deletion of extracted artifacts at process exit.
//!
//! Extracted files are recorded here and removed by a `libc::atexit`
//! handler on normal termination. Removal failures are ignored: the
//! in-memory mapping does not depend on the file, and the operating
//! system reclaims the temp directory eventually.

use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::OnceLock;

static PENDING: OnceLock<Mutex<Vec<PathBuf>>> = OnceLock::new();

/// Schedule `path` for deletion at normal process exit.
pub(crate) fn register(path: PathBuf) {
    let pending = PENDING.get_or_init(|| {
        // Registered once, on first use. A failed registration just
        // means the files outlive the process; not an error.
        unsafe {
            libc::atexit(delete_pending);
        }
        Mutex::new(Vec::new())
    });
    pending.lock().push(path);
}

extern "C" fn delete_pending() {
    run_now();
}

/// Delete everything scheduled so far. Failures are ignored.
pub(crate) fn run_now() {
    if let Some(pending) = PENDING.get() {
        for path in pending.lock().drain(..) {
            let _ = std::fs::remove_file(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_registered_files_are_removed() {
        let mut temp = tempfile::Builder::new()
            .prefix("fortbind-cleanup")
            .tempfile()
            .unwrap();
        temp.write_all(b"scratch").unwrap();
        let (_file, path) = temp.keep().unwrap();

        register(path.clone());
        run_now();
        assert!(!path.exists(), "cleanup should remove registered files");
    }

    #[test]
    fn test_missing_files_are_tolerated() {
        let ghost = std::env::temp_dir().join("fortbind-cleanup-never-created");
        register(ghost);
        // Must not panic even though there is nothing to delete.
        run_now();
    }
}
