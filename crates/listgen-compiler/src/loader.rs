//! Loading list files.

use camino::Utf8Path;
use listgen_core::InputList;
use tracing::debug;

use crate::error::CompileError;

/// Reads one list file.
///
/// # Errors
///
/// Returns [`CompileError::FileIo`] if the file cannot be read or is not
/// valid UTF-8.
pub fn load_list(path: &Utf8Path) -> Result<InputList, CompileError> {
    let content = std::fs::read_to_string(path).map_err(|e| CompileError::file_io(path, e))?;
    let lines = split_lines(&content);
    debug!(path = %path, lines = lines.len(), "Loaded list");

    let file_name = path.file_name().unwrap_or(path.as_str());
    Ok(InputList::new(file_name, lines))
}

/// Splits text into list elements on line boundaries.
///
/// Both `\n` and `\r\n` end a line. A final line terminator does not add an
/// empty trailing element; blank lines elsewhere are kept.
///
/// # Examples
///
/// ```
/// use listgen_compiler::split_lines;
///
/// assert_eq!(split_lines("red\r\ngreen\n\nblue\n"), vec!["red", "green", "", "blue"]);
/// assert!(split_lines("").is_empty());
/// ```
#[must_use]
pub fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(ToOwned::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn test_split_without_trailing_newline() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
    }

    #[test]
    fn test_split_keeps_duplicates_and_whitespace() {
        assert_eq!(split_lines(" a \na\na\n"), vec![" a ", "a", "a"]);
    }

    #[test]
    fn test_split_lone_newline() {
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_load_list_reads_lines() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("colors.txt");
        std::fs::write(&path, "red\ngreen\nblue\n").unwrap();

        let path = Utf8PathBuf::from_path_buf(path).unwrap();
        let list = load_list(&path).unwrap();
        assert_eq!(list.file_name(), "colors.txt");
        assert_eq!(list.lines(), ["red", "green", "blue"]);
    }

    #[test]
    fn test_load_empty_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("empty.txt");
        std::fs::write(&path, "").unwrap();

        let path = Utf8PathBuf::from_path_buf(path).unwrap();
        assert!(load_list(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_invalid_utf8_fails() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let path = Utf8PathBuf::from_path_buf(path).unwrap();
        let err = load_list(&path).unwrap_err();
        assert!(matches!(err, CompileError::FileIo { .. }));
    }

    #[test]
    fn test_load_missing_file_fails() {
        let err = load_list(Utf8Path::new("/nonexistent/colors.txt")).unwrap_err();
        assert_eq!(
            err.path().map(|p| p.as_str()),
            Some("/nonexistent/colors.txt")
        );
    }
}
