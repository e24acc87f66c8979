//! Input list files.

/// A plain-text list file read from the working directory.
///
/// Each line of the file is one element, in file order. Duplicates and blank
/// interior lines are kept.
///
/// # Examples
///
/// ```
/// use listgen_core::InputList;
///
/// let list = InputList::new("colors.txt", vec!["red".into(), "green".into()]);
/// assert_eq!(list.file_name(), "colors.txt");
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputList {
    file_name: String,
    lines: Vec<String>,
}

impl InputList {
    /// Creates a list from a file name (including extension) and its lines.
    #[must_use]
    pub fn new(file_name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            file_name: file_name.into(),
            lines,
        }
    }

    /// The file name, including extension.
    #[inline]
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The lines of the file, in order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the file had no lines.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consumes the list, returning its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
