//! Shared capability-based filesystem helpers for persona-data tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Create a unique file path under `target/persona-data-tests`.
///
/// The parent directory is created; the file itself is not.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory.
pub fn unique_temp_path(prefix: &str, file_name: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("persona-data-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir.join(file_name))
}

/// Read the file at `path` through a handle on its parent directory.
///
/// # Errors
///
/// Returns any filesystem errors encountered while opening or reading.
pub fn read_export(path: &Utf8Path) -> io::Result<String> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path.file_name().unwrap_or_default();
    Dir::open_ambient_dir(parent, ambient_authority())?.read_to_string(file_name)
}

/// Remove the directory that holds `path`, ignoring failures.
pub fn remove_parent_dir(path: &Utf8Path) {
    if let Some(parent) = path.parent() {
        if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
            drop(root.remove_dir_all(parent));
        }
    }
}
