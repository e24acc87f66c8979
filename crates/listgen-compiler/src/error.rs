//! Error types for the listgen-compiler crate.
//!
//! Every [`CompileError`] is fatal: the run stops at the first one and any
//! output already appended during the run is left as is.

use camino::Utf8PathBuf;
use listgen_core::{ConfigError, IdentifierName};

/// Errors that can occur while compiling list files.
///
/// # Examples
///
/// ```
/// use listgen_compiler::CompileError;
///
/// fn describe(err: &CompileError) -> &'static str {
///     match err {
///         CompileError::DirectoryAccess { .. } => "cannot list directory",
///         CompileError::FileIo { .. } => "cannot read or write a file",
///         CompileError::NonUtf8Path(_) => "file name is not UTF-8",
///         CompileError::NameCollision { .. } => "duplicate identifier",
///         CompileError::Config(_) => "bad configuration",
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// The working directory could not be listed.
    #[error("failed to list directory {path}: {source}")]
    DirectoryAccess {
        /// The directory being listed.
        path: Utf8PathBuf,
        /// The underlying listing error.
        #[source]
        source: ignore::Error,
    },

    /// An input file could not be read, or the output could not be written.
    #[error("failed to access file {path}: {source}")]
    FileIo {
        /// The file that failed.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A directory entry has a name that is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// Two list files derive the same identifier.
    #[error("identifier '{name}' derived from both '{first}' and '{second}'")]
    NameCollision {
        /// The shared identifier.
        name: IdentifierName,
        /// File that claimed the identifier first.
        first: String,
        /// File that collided with it.
        second: String,
    },

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CompileError {
    /// Creates a new [`CompileError::DirectoryAccess`] error.
    #[inline]
    pub fn directory(path: impl Into<Utf8PathBuf>, source: ignore::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`CompileError::FileIo`] error.
    #[inline]
    pub fn file_io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::FileIo {
            path: path.into(),
            source,
        }
    }

    /// Returns the path associated with this error, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8PathBuf> {
        match self {
            Self::DirectoryAccess { path, .. } | Self::FileIo { path, .. } => Some(path),
            Self::NonUtf8Path(_) | Self::NameCollision { .. } | Self::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_file_io_error() {
        let err = CompileError::file_io(
            "static/colors.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.path().map(|p| p.as_str()), Some("static/colors.txt"));
        assert!(err.to_string().contains("static/colors.txt"));
    }

    #[test]
    fn test_directory_error() {
        let source = ignore::Error::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let err = CompileError::directory("static", source);
        assert_eq!(err.path().map(|p| p.as_str()), Some("static"));
        assert!(err.to_string().starts_with("failed to list directory static"));
    }

    #[test]
    fn test_name_collision_display() {
        let err = CompileError::NameCollision {
            name: IdentifierName::new("UserAgents"),
            first: "user-agents.txt".to_owned(),
            second: "user-agents.lst".to_owned(),
        };
        assert!(err.path().is_none());
        assert_eq!(
            err.to_string(),
            "identifier 'UserAgents' derived from both 'user-agents.txt' and 'user-agents.lst'"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err = CompileError::from(ConfigError::invalid_option("package_name", "empty"));
        assert_eq!(
            err.to_string(),
            "invalid configuration option 'package_name': empty"
        );
    }
}
