//! Atomic file output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::error::{Error, Result};

/// Replace `path` with `contents` atomically.
///
/// The bytes go to a temporary file next to `path`, which is flushed and
/// then renamed over the destination. On failure the temporary file is
/// removed and an existing file at `path` is left as it was. The parent
/// directory must already exist.
///
/// An existing destination keeps its permissions, and a symlinked
/// destination is written through to its target. A new file gets `0644`
/// minus the process umask, as a plain create would.
///
/// # Errors
///
/// Returns [`Error::Write`] if the temporary file cannot be created,
/// written, or renamed into place.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path);
    let parent = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    if !fs::metadata(parent).map_err(write_err)?.is_dir() {
        return Err(write_err(std::io::Error::other(format!(
            "{} is not a directory",
            parent.display()
        ))));
    }

    let existing = fs::metadata(&target)
        .ok()
        .filter(fs::Metadata::is_file)
        .map(|meta| meta.permissions());

    let mut temp = temp_builder().tempfile_in(parent).map_err(write_err)?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions).map_err(write_err)?;
    }
    temp.write_all(contents).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    // Dropping the error drops the temp file, which deletes it
    temp.persist(&target).map_err(|e| write_err(e.error))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());

    Ok(())
}

/// Follow a symlinked destination so the link itself survives the rename.
///
/// A dangling link is replaced like a regular file.
fn resolve_target(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

fn temp_builder() -> Builder<'static, 'static> {
    let mut builder = Builder::new();
    builder.prefix(".img2header");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o644));
    }
    builder
}
