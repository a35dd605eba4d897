//! Writing of generated headers.

use crate::error::{EmbedError, EmbedResult};
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;

/// Creates the directory that will hold `path`, including any missing ancestors.
///
/// Paths without a parent (or with an empty one, like `out.h`) need no directory.
pub fn ensure_parent_dir(path: &Path) -> EmbedResult<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    if parent.is_dir() {
        return Ok(());
    }

    debug!("Creating output directory {}", parent.display());
    fs::create_dir_all(parent).map_err(|source| EmbedError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    })
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// Missing parent directories are created first. The data is written to a temporary file in
/// the destination directory, flushed to disk and then renamed over the destination. On
/// failure the previous file (if any) is left untouched and the temporary file is removed.
///
/// If `path` is a symbolic link, the file it points to is replaced and the link is kept.
/// An existing read-only file is not replaced.
///
/// # Arguments
///
/// * `path` - Path to the output file (will be created or replaced)
/// * `contents` - Complete file contents
///
/// # Returns
///
/// `Ok(())` on success, or an error for which [`EmbedError::is_write`] holds.
pub fn write_output(path: &Path, contents: &[u8]) -> EmbedResult<()> {
    let write_error = |source: io::Error| EmbedError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let destination = resolve_links(path).map_err(write_error)?;
    ensure_parent_dir(&destination)?;

    let existing = fs::metadata(&destination).ok().filter(fs::Metadata::is_file);
    if existing.as_ref().is_some_and(|m| m.permissions().readonly()) {
        return Err(write_error(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "existing output file is read-only",
        )));
    }

    let directory = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = Builder::new()
        .prefix(".embed-header-")
        .suffix(".tmp")
        .tempfile_in(directory)
        .map_err(write_error)?;
    staged.write_all(contents).map_err(write_error)?;

    // Staging files are created owner-only.
    let permissions = existing.map(|m| m.permissions()).or_else(default_permissions);
    if let Some(permissions) = permissions {
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }
    staged.as_file().sync_all().map_err(write_error)?;

    debug!(
        "Moving {} into place at {}",
        staged.path().display(),
        destination.display()
    );
    staged.persist(&destination).map_err(|e| write_error(e.error))?;
    Ok(())
}

/// Limit on chained symbolic links, matching Linux's `MAXSYMLINKS`.
const MAX_LINK_DEPTH: usize = 40;

/// Follows symbolic links at `path` to the file that should receive the data.
///
/// A dangling link resolves to its (missing) target, so the target gets created.
fn resolve_links(path: &Path) -> io::Result<PathBuf> {
    let mut destination = path.to_path_buf();
    for _ in 0..MAX_LINK_DEPTH {
        match fs::symlink_metadata(&destination) {
            Ok(metadata) if metadata.file_type().is_symlink() => {
                let target = fs::read_link(&destination)?;
                // Relative targets are relative to the link's directory.
                destination = match destination.parent() {
                    Some(parent) => parent.join(target),
                    None => target,
                };
            }
            Ok(_) => return Ok(destination),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(destination),
            Err(e) => return Err(e),
        }
    }
    Err(io::Error::other("too many levels of symbolic links"))
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}
