//! Generated declarations.

use super::list::InputList;
use super::name::IdentifierName;

/// One generated string-array constant, corresponding to one [`InputList`].
///
/// The declared length is always the element count; there is no way to build
/// a declaration whose size and literal list disagree.
///
/// # Examples
///
/// ```
/// use listgen_core::{GeneratedDeclaration, IdentifierName, InputList};
///
/// let list = InputList::new("colors.txt", vec!["red".into(), "green".into(), "blue".into()]);
/// let decl = GeneratedDeclaration::new(IdentifierName::new("Colors"), list);
/// assert_eq!(decl.length(), 3);
/// assert_eq!(decl.source_file(), "colors.txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDeclaration {
    name: IdentifierName,
    source_file: String,
    elements: Vec<String>,
}

impl GeneratedDeclaration {
    /// Builds the declaration for `list` under `name`.
    #[must_use]
    pub fn new(name: IdentifierName, list: InputList) -> Self {
        let source_file = list.file_name().to_owned();
        Self {
            name,
            source_file,
            elements: list.into_lines(),
        }
    }

    /// The declared identifier.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &IdentifierName {
        &self.name
    }

    /// File name of the list this declaration came from.
    #[inline]
    #[must_use]
    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    /// The unescaped element values.
    #[inline]
    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Declared array length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.elements.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_tracks_elements() {
        let list = InputList::new("empty.txt", Vec::new());
        let decl = GeneratedDeclaration::new(IdentifierName::new("Empty"), list);
        assert_eq!(decl.length(), 0);
        assert!(decl.elements().is_empty());
        assert_eq!(decl.name().as_str(), "Empty");
    }
}
