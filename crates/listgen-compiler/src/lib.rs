//! Compiles a directory of line lists into Go string-array constants.
//!
//! Each file in the working directory is one list. Its lines become the
//! elements of a `[N]string` constant named after the file, and all constants
//! land in a single generated Go file.
//!
//! # Example
//!
//! ```ignore
//! use listgen_compiler::ListCompiler;
//! use listgen_core::CompileConfig;
//!
//! let compiler = ListCompiler::new(CompileConfig::default())?;
//! let summary = compiler.run()?;
//! println!("Wrote {} lists to {}", summary.lists, summary.output);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ListCompiler
//!     ├── InputDiscovery   (discover)  directory listing via `ignore`
//!     ├── load_list        (loader)    file -> InputList
//!     ├── derive_identifier (ident)    file name -> IdentifierName
//!     ├── Renderer         (render)    declarations -> Go source
//!     └── emit             (emit)      replace or append the output
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod compiler;
pub mod discover;
pub mod emit;
pub mod error;
pub mod ident;
pub mod loader;
pub mod render;

pub use compiler::{CompileSummary, ListCompiler, RenderedOutput};
pub use discover::InputDiscovery;
pub use emit::{emit, is_up_to_date};
pub use error::CompileError;
pub use ident::derive_identifier;
pub use loader::{load_list, split_lines};
pub use render::{Renderer, escape_go_string};
