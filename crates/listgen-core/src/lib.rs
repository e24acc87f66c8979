//! Core types, errors, and configuration for the listgen tool.
//!
//! listgen turns a directory of plain-text list files into a single generated
//! Go source file holding one string-array constant per list. This crate holds
//! the pieces shared by the compiler and the CLI:
//!
//! - [`Config`] and [`CompileConfig`] for controlling a run
//! - [`ConfigError`] for configuration failures
//! - Domain types ([`InputList`], [`IdentifierName`], [`GeneratedDeclaration`])
//! - Type aliases for `FxHashMap`/`FxHashSet`

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{CompileConfig, Config, ContainerShape, WriteMode};
pub use error::ConfigError;
pub use hash::{FxHashMap, FxHashSet, fx_hash_map, fx_hash_set};
pub use types::{GeneratedDeclaration, IdentifierName, InputList};
