//! Writing the output file.
//!
//! In [`WriteMode::Truncate`] the new content goes to a `.tmp` sibling that is
//! then renamed over the output, so readers never see a half-written file. In
//! [`WriteMode::Append`] the content is appended to whatever is already there.

use std::fs::OpenOptions;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use listgen_core::WriteMode;
use tracing::debug;

use crate::discover::TEMP_SUFFIX;
use crate::error::CompileError;

/// Writes `content` to `path` according to `mode`.
///
/// # Errors
///
/// Returns [`CompileError::FileIo`] if the output (or its temporary sibling)
/// cannot be opened, written, or renamed.
pub fn emit(path: &Utf8Path, content: &str, mode: WriteMode) -> Result<(), CompileError> {
    match mode {
        WriteMode::Truncate => replace(path, content),
        WriteMode::Append => append(path, content),
    }
}

fn replace(path: &Utf8Path, content: &str) -> Result<(), CompileError> {
    let temp_path = Utf8PathBuf::from(format!("{path}{TEMP_SUFFIX}"));

    std::fs::write(&temp_path, content).map_err(|e| CompileError::file_io(&temp_path, e))?;
    std::fs::rename(&temp_path, path).map_err(|e| CompileError::file_io(path, e))?;

    debug!(path = %path, bytes = content.len(), "Replaced output");
    Ok(())
}

fn append(path: &Utf8Path, content: &str) -> Result<(), CompileError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CompileError::file_io(path, e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| CompileError::file_io(path, e))?;

    debug!(path = %path, bytes = content.len(), "Appended to output");
    Ok(())
}

/// Returns `true` if the file at `path` already holds exactly `content`.
///
/// A missing file is reported as not up to date.
///
/// # Errors
///
/// Returns [`CompileError::FileIo`] if the file exists but cannot be read.
pub fn is_up_to_date(path: &Utf8Path, content: &str) -> Result<bool, CompileError> {
    match std::fs::read(path) {
        Ok(existing) => Ok(existing == content.as_bytes()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(CompileError::file_io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_in(dir: &tempfile::TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join("static-lists.go")).unwrap()
    }

    #[test]
    fn test_truncate_replaces_content() {
        let temp = tempfile::tempdir().unwrap();
        let path = output_in(&temp);

        emit(&path, "first\n", WriteMode::Truncate).unwrap();
        emit(&path, "second\n", WriteMode::Truncate).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second\n");
        assert!(!temp.path().join("static-lists.go.tmp").exists());
    }

    #[test]
    fn test_append_accumulates() {
        let temp = tempfile::tempdir().unwrap();
        let path = output_in(&temp);

        emit(&path, "first\n", WriteMode::Append).unwrap();
        emit(&path, "second\n", WriteMode::Append).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_emit_into_missing_dir_fails() {
        let path = Utf8Path::new("/nonexistent/listgen/static-lists.go");
        for mode in [WriteMode::Truncate, WriteMode::Append] {
            let err = emit(path, "x", mode).unwrap_err();
            assert!(matches!(err, CompileError::FileIo { .. }));
        }
    }

    #[test]
    fn test_is_up_to_date() {
        let temp = tempfile::tempdir().unwrap();
        let path = output_in(&temp);

        assert!(!is_up_to_date(&path, "package x\n\n").unwrap());
        std::fs::write(&path, "package x\n\n").unwrap();
        assert!(is_up_to_date(&path, "package x\n\n").unwrap());
        assert!(!is_up_to_date(&path, "package y\n\n").unwrap());
    }
}
