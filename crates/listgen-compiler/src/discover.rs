//! Input discovery.
//!
//! [`InputDiscovery`] lists the list files sitting directly in the working
//! directory. It uses the `ignore` crate's walker with every filter turned
//! off and depth capped at one, so the result matches a plain directory
//! listing: hidden files are included and nothing below a subdirectory is
//! visited.
//!
//! # Examples
//!
//! ```ignore
//! use listgen_compiler::InputDiscovery;
//! use camino::Utf8Path;
//!
//! let inputs = InputDiscovery::new(Utf8Path::new("static"))
//!     .with_excluded(["lines-to-stringarray.py", "static-lists.go"])
//!     .discover()?;
//! ```

use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use listgen_core::{CompileConfig, FxHashSet, fx_hash_set};
use tracing::{debug, warn};

use crate::error::CompileError;

/// Suffix appended to the output file name while it is being replaced.
pub const TEMP_SUFFIX: &str = ".tmp";

/// Finds the list files in a directory.
#[derive(Debug)]
pub struct InputDiscovery {
    /// The directory to list.
    dir: Utf8PathBuf,
    /// File names skipped by exact match.
    excluded: FxHashSet<String>,
    /// Whether to return names in lexicographic order.
    sorted: bool,
}

impl InputDiscovery {
    /// Creates a discovery over `dir` with no exclusions, sorted.
    pub fn new(dir: &Utf8Path) -> Self {
        Self {
            dir: dir.to_owned(),
            excluded: fx_hash_set(),
            sorted: true,
        }
    }

    /// Creates a discovery set up from a [`CompileConfig`].
    ///
    /// Excludes the configured tool files, the output file, and the output's
    /// temporary sibling left behind by an interrupted replace.
    pub fn from_config(config: &CompileConfig) -> Self {
        let temp_name = format!("{}{TEMP_SUFFIX}", config.output_file);
        Self::new(&config.dir)
            .with_excluded(config.excluded.iter().map(String::as_str))
            .with_excluded([config.output_file.as_str(), temp_name.as_str()])
            .with_sorted(config.sort)
    }

    /// Adds file names to skip.
    #[must_use]
    pub fn with_excluded<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        self.excluded.extend(names.into_iter().map(ToOwned::to_owned));
        self
    }

    /// Sets whether results come back sorted by file name.
    ///
    /// Unsorted results follow the platform's directory listing order, which
    /// is not stable across runs or machines.
    #[must_use]
    pub fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Lists the candidate list files.
    ///
    /// Subdirectories are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::DirectoryAccess`] if the directory is missing,
    /// is not a directory, or cannot be listed, and
    /// [`CompileError::NonUtf8Path`] for a name that is not UTF-8. An entry
    /// that cannot be inspected, such as a dangling symlink, is a
    /// [`CompileError::FileIo`] for that entry. No partial result is returned.
    pub fn discover(&self) -> Result<Vec<Utf8PathBuf>, CompileError> {
        self.check_dir()?;

        let mut paths = Vec::new();
        for result in self.build_walker() {
            let entry = result.map_err(|e| self.entry_error(e))?;

            // The walk yields the directory itself first.
            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| CompileError::NonUtf8Path(path.to_owned()))?;

            let Some(file_name) = utf8_path.file_name() else {
                continue;
            };
            if self.is_excluded(file_name) {
                debug!(file = file_name, "Skipping excluded file");
                continue;
            }
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                warn!(path = %utf8_path, "Skipping non-file entry");
                continue;
            }

            debug!(file = file_name, "Discovered list");
            paths.push(utf8_path.to_owned());
        }

        Ok(paths)
    }

    fn check_dir(&self) -> Result<(), CompileError> {
        let metadata = std::fs::metadata(&self.dir)
            .map_err(|e| CompileError::directory(&self.dir, e.into()))?;
        if !metadata.is_dir() {
            let err = std::io::Error::other(format!("{} is not a directory", self.dir));
            return Err(CompileError::directory(&self.dir, err.into()));
        }
        Ok(())
    }

    /// Maps a walker error to the file it concerns, if it names one.
    ///
    /// A dangling symlink is an unreadable input file, not an unlistable
    /// directory.
    fn entry_error(&self, err: ignore::Error) -> CompileError {
        let path = error_path(&err)
            .and_then(Utf8Path::from_path)
            .map(Utf8Path::to_path_buf);
        let source = err
            .io_error()
            .map(|e| std::io::Error::new(e.kind(), e.to_string()));

        match (path, source) {
            (Some(path), Some(source)) if path != self.dir => CompileError::file_io(path, source),
            _ => CompileError::directory(&self.dir, err),
        }
    }

    fn build_walker(&self) -> ignore::Walk {
        let mut builder = WalkBuilder::new(&self.dir);
        builder
            // A plain listing: no gitignore, no hidden-file filtering
            .standard_filters(false)
            .max_depth(Some(1))
            // Symlinked lists are read through
            .follow_links(true);
        if self.sorted {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        builder.build()
    }

    fn is_excluded(&self, file_name: &str) -> bool {
        self.excluded.contains(file_name)
    }

    /// Returns the directory being listed.
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
