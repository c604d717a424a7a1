//! Atomic export file writes.
//!
//! Exports are written to a hidden sibling file and renamed over the target,
//! so an interrupted export never leaves a truncated file behind.

use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::{Utf8Component, Utf8Path};
use cap_std::fs::{Dir, OpenOptions};

use crate::error::ExportError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `contents` to `file_name` inside `dir` via a temp file and rename.
///
/// `display_path` is only used in error reports.
///
/// # Errors
///
/// Returns [`ExportError::Write`] if `file_name` is not a plain file name or
/// the file cannot be written.
pub(crate) fn write_atomic(
    dir: &Dir,
    file_name: &Utf8Path,
    display_path: &Utf8Path,
    contents: &[u8],
) -> Result<(), ExportError> {
    let mut components = file_name.components();
    let (Some(Utf8Component::Normal(name)), None) = (components.next(), components.next()) else {
        return Err(write_error(display_path, "export path must name a file"));
    };
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    let tmp_name = format!(".{name}.tmp.{}.{stamp}.{counter}", std::process::id());

    write_temp_file(dir, &tmp_name, display_path, contents)?;
    if let Err(err) = replace_target(dir, &tmp_name, name) {
        drop(dir.remove_file(&tmp_name));
        return Err(write_error(display_path, err.to_string()));
    }
    sync_directory(dir);

    Ok(())
}

fn write_temp_file(
    dir: &Dir,
    tmp_name: &str,
    display_path: &Utf8Path,
    contents: &[u8],
) -> Result<(), ExportError> {
    let tmp_path = display_path.with_file_name(tmp_name);
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let mut file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| write_error(&tmp_path, err.to_string()))?;

    if let Err(err) = file.write_all(contents).and_then(|()| file.sync_all()) {
        drop(file);
        drop(dir.remove_file(tmp_name));
        return Err(write_error(&tmp_path, err.to_string()));
    }
    Ok(())
}

#[cfg(windows)]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Rename does not overwrite on Windows.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn replace_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn sync_directory(dir: &Dir) {
    // Best effort.
    drop(dir.open(".").and_then(|handle| handle.sync_all()));
}

fn write_error(path: &Utf8Path, message: impl Into<String>) -> ExportError {
    ExportError::Write {
        path: path.to_path_buf(),
        message: message.into(),
    }
}
