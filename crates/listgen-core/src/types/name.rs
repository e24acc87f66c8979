//! Identifier names for generated declarations.

use std::fmt;

/// The Go identifier a list file is declared under.
///
/// Derived from the file name by the compiler; see
/// `listgen_compiler::derive_identifier`. No validation against Go keywords
/// is performed.
///
/// # Examples
///
/// ```
/// use listgen_core::IdentifierName;
///
/// let name = IdentifierName::new("StaticLists");
/// assert_eq!(name.as_str(), "StaticLists");
/// assert_eq!(name.to_string(), "StaticLists");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentifierName(String);

impl IdentifierName {
    /// Wraps an already-derived identifier.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if derivation produced nothing (e.g. a file named `-.txt`).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IdentifierName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IdentifierName {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<IdentifierName> for String {
    #[inline]
    fn from(name: IdentifierName) -> Self {
        name.0
    }
}
