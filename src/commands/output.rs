//! Writing command output.
//!
//! Files are written atomically: content goes to `.{filename}.tmp` in the
//! same directory, is synced, then renamed over the target, so a migration
//! file is never observed half-written.

use rowlock::error::{Result, RowLockError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `content` to `path`, or to stdout when no path is given.
pub(super) fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            atomic_write(path, content.as_bytes())?;
            tracing::info!(path = %path.display(), "wrote migration");
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            RowLockError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    let result = write_and_sync(&temp_path, content).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| {
            RowLockError::UserError(format!("failed to replace '{}': {}", path.display(), e))
        })
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| RowLockError::UserError("invalid output path".to_string()))?;
    let parent = target.parent().unwrap_or(Path::new("."));
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        RowLockError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;
    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| RowLockError::UserError(format!("failed to write '{}': {}", path.display(), e)))
}
