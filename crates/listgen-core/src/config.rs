//! Configuration structures for the listgen tool.
//!
//! - [`CompileConfig`] - What to read, what to write, and how to render it
//! - [`WriteMode`] - Whether the output is replaced or appended to
//! - [`ContainerShape`] - Fixed-size arrays or slices in the generated code
//! - [`Config`] - Root configuration, loadable from JSON
//!
//! Defaults reproduce the original generator's conventions (`static-lists.go`,
//! package `cachesnake`) with the corrected behaviors switched on: sorted
//! input order, truncating writes, escaped literals, and collision checks.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default name of the generated Go file.
pub const DEFAULT_OUTPUT_FILE: &str = "static-lists.go";

/// Default Go package for the generated file.
pub const DEFAULT_PACKAGE_NAME: &str = "cachesnake";

/// Name of the generator script that historically lived beside the lists.
pub const LEGACY_SCRIPT_NAME: &str = "lines-to-stringarray.py";

/// How the output file is opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Replace the output atomically (write a temp file, then rename).
    #[default]
    Truncate,
    /// Append after any existing content. Reruns duplicate everything.
    Append,
}

/// Go container type used for each generated declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerShape {
    /// `var Name [N]string = [N]string{ ... }`
    #[default]
    FixedArray,
    /// `var Name = []string{ ... }`
    Slice,
}

/// Configuration for one compilation run.
///
/// # Examples
///
/// ```
/// use listgen_core::{CompileConfig, WriteMode};
///
/// let config = CompileConfig::default();
/// assert_eq!(config.output_file, "static-lists.go");
/// assert_eq!(config.package_name, "cachesnake");
/// assert_eq!(config.write_mode, WriteMode::Truncate);
/// assert!(config.sort);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileConfig {
    /// Directory holding the list files. The output is written here too.
    pub dir: Utf8PathBuf,

    /// File name of the generated Go source, relative to `dir`.
    pub output_file: String,

    /// Go package named in the header line.
    pub package_name: String,

    /// File names never treated as lists (exact match).
    ///
    /// The output file is always excluded on top of these.
    pub excluded: Vec<String>,

    /// Whether to replace or append to the output file.
    pub write_mode: WriteMode,

    /// Escape list lines as Go string literals.
    ///
    /// When `false`, each line is wrapped in quotes verbatim; lines holding a
    /// quote or backslash then produce invalid Go.
    pub escape: bool,

    /// Process list files in lexicographic order instead of listing order.
    pub sort: bool,

    /// Fail when two list files derive the same identifier.
    pub detect_collisions: bool,

    /// Container type for generated declarations.
    pub container: ContainerShape,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            dir: Utf8PathBuf::from("."),
            output_file: DEFAULT_OUTPUT_FILE.to_owned(),
            package_name: DEFAULT_PACKAGE_NAME.to_owned(),
            excluded: vec![LEGACY_SCRIPT_NAME.to_owned()],
            write_mode: WriteMode::Truncate,
            escape: true,
            sort: true,
            detect_collisions: true,
            container: ContainerShape::FixedArray,
        }
    }
}

impl CompileConfig {
    /// Full path of the generated file.
    #[must_use]
    pub fn output_path(&self) -> Utf8PathBuf {
        self.dir.join(&self.output_file)
    }

    /// Header line opening the generated file.
    ///
    /// # Examples
    ///
    /// ```
    /// use listgen_core::CompileConfig;
    ///
    /// assert_eq!(CompileConfig::default().header(), "package cachesnake");
    /// ```
    #[must_use]
    pub fn header(&self) -> String {
        format!("package {}", self.package_name)
    }

    /// Checks option values that would otherwise surface as broken output.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOption`] if the output file is not a bare
    /// file name or the package name is not a Go identifier.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_file.is_empty() {
            return Err(ConfigError::invalid_option(
                "output_file",
                "must not be empty",
            ));
        }
        if Utf8Path::new(&self.output_file).file_name() != Some(self.output_file.as_str()) {
            return Err(ConfigError::invalid_option(
                "output_file",
                format!("'{}' must be a bare file name", self.output_file),
            ));
        }
        if !is_go_identifier(&self.package_name) {
            return Err(ConfigError::invalid_option(
                "package_name",
                format!("'{}' is not a valid Go package name", self.package_name),
            ));
        }
        Ok(())
    }
}

/// Root configuration for listgen.
///
/// # Examples
///
/// ```
/// use listgen_core::{Config, ContainerShape};
///
/// let config = Config::from_json_str(r#"{"compile": {"container": "slice"}}"#).unwrap();
/// assert_eq!(config.compile.container, ContainerShape::Slice);
/// assert_eq!(config.compile.output_file, "static-lists.go");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Compilation settings.
    pub compile: CompileConfig,
}

impl Config {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its content is invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_') && chars.all(|c| c.is_alphanumeric() || c == '_')
}
