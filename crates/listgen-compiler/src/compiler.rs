//! The list compiler.
//!
//! [`ListCompiler`] runs the whole pipeline in one synchronous pass:
//!
//! ```text
//! InputDiscovery::discover   list the directory (sorted unless disabled)
//!     │
//!     ├── load_list          one InputList per file
//!     ├── derive_identifier  file name -> IdentifierName (collision checked)
//!     │
//! Renderer::render_source    header + one line per declaration
//!     │
//! emit                       replace or append the output file
//! ```
//!
//! The first error aborts the run.

use camino::Utf8PathBuf;
use listgen_core::{
    CompileConfig, ConfigError, FxHashMap, GeneratedDeclaration, IdentifierName, WriteMode,
    hash::fx_hash_map_with_capacity,
};
use tracing::{debug, info, instrument};

use crate::discover::InputDiscovery;
use crate::emit::{emit, is_up_to_date};
use crate::error::CompileError;
use crate::ident::derive_identifier;
use crate::loader::load_list;
use crate::render::Renderer;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSummary {
    /// Path of the output file.
    pub output: Utf8PathBuf,
    /// Number of list files compiled.
    pub lists: usize,
    /// Total number of elements across all lists.
    pub elements: usize,
    /// Bytes of generated source.
    pub bytes: usize,
    /// How the output was written.
    pub write_mode: WriteMode,
}

/// Generated source held in memory, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// The declarations, in processing order.
    pub declarations: Vec<GeneratedDeclaration>,
    /// The complete file text.
    pub source: String,
}

impl RenderedOutput {
    fn element_count(&self) -> usize {
        self.declarations.iter().map(GeneratedDeclaration::length).sum()
    }
}

/// Compiles a directory of list files into one Go source file.
///
/// # Examples
///
/// ```ignore
/// use listgen_compiler::ListCompiler;
/// use listgen_core::CompileConfig;
///
/// let compiler = ListCompiler::new(CompileConfig::default())?;
/// let summary = compiler.run()?;
/// println!("{} lists -> {}", summary.lists, summary.output);
/// ```
#[derive(Debug, Clone)]
pub struct ListCompiler {
    config: CompileConfig,
    renderer: Renderer,
}

impl ListCompiler {
    /// Creates a compiler for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError::Config`] if the configuration is invalid.
    pub fn new(config: CompileConfig) -> Result<Self, CompileError> {
        config.validate()?;
        let renderer = Renderer::from_config(&config);
        Ok(Self { config, renderer })
    }

    /// Returns the configuration in use.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Discovers and loads every list, deriving its declaration.
    ///
    /// # Errors
    ///
    /// Fails on the first discovery or read error, and on a duplicate
    /// identifier when collision detection is on.
    #[instrument(skip(self), fields(dir = %self.config.dir))]
    pub fn collect(&self) -> Result<Vec<GeneratedDeclaration>, CompileError> {
        let paths = InputDiscovery::from_config(&self.config).discover()?;
        debug!(count = paths.len(), "Discovered lists");

        let mut claimed: FxHashMap<IdentifierName, String> =
            fx_hash_map_with_capacity(paths.len());
        let mut declarations = Vec::with_capacity(paths.len());

        for path in &paths {
            let list = load_list(path)?;
            let name = derive_identifier(list.file_name());

            if self.config.detect_collisions {
                if let Some(first) = claimed.get(&name) {
                    return Err(CompileError::NameCollision {
                        name,
                        first: first.clone(),
                        second: list.file_name().to_owned(),
                    });
                }
                claimed.insert(name.clone(), list.file_name().to_owned());
            }

            declarations.push(GeneratedDeclaration::new(name, list));
        }

        Ok(declarations)
    }

    /// Collects and renders the output without writing it.
    ///
    /// # Errors
    ///
    /// See [`ListCompiler::collect`].
    pub fn render(&self) -> Result<RenderedOutput, CompileError> {
        let declarations = self.collect()?;
        let source = self
            .renderer
            .render_source(&self.config.header(), &declarations);
        Ok(RenderedOutput {
            declarations,
            source,
        })
    }

    /// Runs the full pipeline and writes the output file.
    ///
    /// # Errors
    ///
    /// Fails on the first error from any step. Output written before the
    /// failure is not rolled back.
    pub fn run(&self) -> Result<CompileSummary, CompileError> {
        let rendered = self.render()?;
        let output = self.config.output_path();

        emit(&output, &rendered.source, self.config.write_mode)?;

        let summary = CompileSummary {
            lists: rendered.declarations.len(),
            elements: rendered.element_count(),
            bytes: rendered.source.len(),
            write_mode: self.config.write_mode,
            output,
        };
        info!(
            output = %summary.output,
            lists = summary.lists,
            elements = summary.elements,
            "Generated list constants"
        );
        Ok(summary)
    }

    /// Reports whether the output file already matches what a truncating run
    /// would write.
    ///
    /// # Errors
    ///
    /// Fails in [`WriteMode::Append`], where a rerun never reproduces the
    /// file, and if rendering fails or the existing output cannot be read.
    pub fn check(&self) -> Result<bool, CompileError> {
        if self.config.write_mode == WriteMode::Append {
            return Err(ConfigError::invalid_option(
                "write_mode",
                "append output grows on every run and cannot be checked",
            )
            .into());
        }

        let rendered = self.render()?;
        let output = self.config.output_path();
        let fresh = is_up_to_date(&output, &rendered.source)?;
        debug!(output = %output, fresh, "Checked output");
        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_for(dir: &tempfile::TempDir) -> CompileConfig {
        CompileConfig {
            dir: Utf8PathBuf::from_path_buf(dir.path().to_owned()).unwrap(),
            ..CompileConfig::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = CompileConfig {
            package_name: String::new(),
            ..CompileConfig::default()
        };
        let err = ListCompiler::new(config).unwrap_err();
        assert!(matches!(
            err,
            CompileError::Config(ConfigError::InvalidOption { .. })
        ));
    }

    #[test]
    fn test_collect_in_sorted_order() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("user-agents.txt"), "curl\n").unwrap();
        fs::write(temp.path().join("colors.txt"), "red\n").unwrap();

        let compiler = ListCompiler::new(config_for(&temp)).unwrap();
        let names: Vec<String> = compiler
            .collect()
            .unwrap()
            .iter()
            .map(|d| d.name().to_string())
            .collect();
        assert_eq!(names, vec!["Colors", "UserAgents"]);
    }

    #[test]
    fn test_collision_detected() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("colors.txt"), "red\n").unwrap();
        fs::write(temp.path().join("colors.lst"), "blue\n").unwrap();

        let compiler = ListCompiler::new(config_for(&temp)).unwrap();
        match compiler.collect() {
            Err(CompileError::NameCollision {
                name,
                first,
                second,
            }) => {
                assert_eq!(name.as_str(), "Colors");
                assert_eq!(first, "colors.lst");
                assert_eq!(second, "colors.txt");
            }
            other => panic!("expected NameCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_collision_allowed_when_disabled() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("colors.txt"), "red\n").unwrap();
        fs::write(temp.path().join("colors.lst"), "blue\n").unwrap();

        let config = CompileConfig {
            detect_collisions: false,
            ..config_for(&temp)
        };
        let decls = ListCompiler::new(config).unwrap().collect().unwrap();
        assert_eq!(decls.len(), 2);
        assert!(decls.iter().all(|d| d.name().as_str() == "Colors"));
    }

    #[test]
    fn test_run_summary_counts() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("colors.txt"), "red\ngreen\nblue\n").unwrap();
        fs::write(temp.path().join("empty.txt"), "").unwrap();

        let summary = ListCompiler::new(config_for(&temp)).unwrap().run().unwrap();
        assert_eq!(summary.lists, 2);
        assert_eq!(summary.elements, 3);
        assert_eq!(summary.write_mode, WriteMode::Truncate);
        assert_eq!(
            fs::read_to_string(&summary.output).unwrap().len(),
            summary.bytes
        );
    }

    #[test]
    fn test_check_tracks_freshness() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("colors.txt"), "red\n").unwrap();
        let compiler = ListCompiler::new(config_for(&temp)).unwrap();

        assert!(!compiler.check().unwrap());
        compiler.run().unwrap();
        assert!(compiler.check().unwrap());

        fs::write(temp.path().join("colors.txt"), "red\nblue\n").unwrap();
        assert!(!compiler.check().unwrap());
    }

    #[test]
    fn test_check_rejects_append_mode() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join("colors.txt"), "red\n").unwrap();
        let config = CompileConfig {
            write_mode: WriteMode::Append,
            ..config_for(&temp)
        };
        let compiler = ListCompiler::new(config).unwrap();
        compiler.run().unwrap();

        let err = compiler.check().unwrap_err();
        assert!(matches!(
            err,
            CompileError::Config(ConfigError::InvalidOption { .. })
        ));
        assert!(err.to_string().contains("write_mode"));
    }
}
