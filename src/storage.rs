//! File access for the two inputs
//!
//! Reads are plain; the database write goes to a temporary file in the
//! same directory which is then renamed over the original, so an
//! interrupted run never leaves a truncated database behind.

use crate::error::{AppError, Result};

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a whole file as UTF-8
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| AppError::file_access(path, e))
}

/// Fail early if `path` is missing or cannot be opened for writing
///
/// The open does not truncate, so the file is left as it was.
pub fn ensure_writable(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| AppError::file_access(path, e))?;
    if metadata.permissions().readonly() {
        return Err(AppError::file_access(
            path,
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "file is read-only"),
        ));
    }

    fs::OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|e| AppError::file_access(path, e))?;
    Ok(())
}

/// Replace the contents of `path` with `contents` atomically
///
/// Symlinks are followed: the file they point at is replaced and the link
/// itself stays in place. The replacement keeps the permissions of the
/// file it replaces.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = fs::canonicalize(path).map_err(|e| AppError::file_access(path, e))?;
    let dir = target.parent().unwrap_or_else(|| Path::new("/"));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AppError::file_access(dir, e))?;
    log::debug!("Writing {} via {}", target.display(), tmp.path().display());

    let metadata = fs::metadata(&target).map_err(|e| AppError::file_access(&target, e))?;
    fs::set_permissions(tmp.path(), metadata.permissions())
        .map_err(|e| AppError::file_access(tmp.path(), e))?;

    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| AppError::file_access(tmp.path(), e))?;

    tmp.persist(&target).map_err(|e| AppError::file_access(&target, e.error))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing() {
        let result = read_to_string(Path::new("/nonexistent/compile_commands.json"));
        assert!(matches!(result, Err(AppError::FileAccess { .. })));
    }

    #[test]
    fn test_write_atomic_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::write(&path, "a much longer previous body that must disappear").unwrap();

        write_atomic(&path, "[]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        // no stray temp files left behind
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_atomic(&path, "[ ]").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_follows_symlink() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        fs::create_dir(&build).unwrap();
        let real = build.join("compile_commands.json");
        let link = dir.path().join("compile_commands.json");
        fs::write(&real, r#"[{"file": "/s/foo.cpp"}]"#).unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_atomic(&link, "[]").unwrap();

        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&real).unwrap(), "[]");
        // temp file lands next to the real file and is gone afterwards
        assert_eq!(fs::read_dir(&build).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_missing_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");

        let result = write_atomic(&path, "[]");

        assert!(matches!(result, Err(AppError::FileAccess { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_writable_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::write(&path, "[1]").unwrap();

        ensure_writable(&path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[1]");
    }

    #[test]
    fn test_ensure_writable_readonly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compile_commands.json");
        fs::write(&path, "[]").unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_readonly(true);
        fs::set_permissions(&path, perms).unwrap();

        assert!(matches!(
            ensure_writable(&path),
            Err(AppError::FileAccess { .. })
        ));
    }

    #[test]
    fn test_ensure_writable_missing() {
        let result = ensure_writable(Path::new("/nonexistent/compile_commands.json"));
        assert!(matches!(result, Err(AppError::FileAccess { .. })));
    }
}
