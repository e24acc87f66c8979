//! Domain types for listgen.
//!
//! - [`list`] - An input list file and its lines
//! - [`name`] - Identifiers derived from list file names
//! - [`declaration`] - One generated constant per list
//!
//! All public types are re-exported here and at the crate root.

mod declaration;
mod list;
mod name;

pub use declaration::GeneratedDeclaration;
pub use list::InputList;
pub use name::IdentifierName;
