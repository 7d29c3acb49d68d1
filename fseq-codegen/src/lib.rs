//! Specialize the lazy sequence module to one concrete element type.
//!
//! [`generate`] validates an element type and a package name, renders a
//! self-contained Rust module implementing the sequence operations for that
//! type, and writes it to `<destination>/<package>.rs`. The rendered module
//! has no dependencies; it only needs the element type to be in scope in
//! the parent module and to implement `Clone`.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let path = fseq_codegen::generate("String", Path::new("src"), "fstring").unwrap();
//! assert_eq!(path, Path::new("src/fstring.rs"));
//! ```

mod error;
mod name;
mod operation;
mod render;
mod specialization;

use std::path::{Path, PathBuf};

pub use error::{Error, Result};
pub use name::{ElementType, PackageName};
pub use operation::{Operation, OperationKind};
pub use render::render;
pub use specialization::Specialization;

/// Render the module for `element_type` and write it to
/// `<destination>/<package_name>.rs`.
///
/// Both names are validated before anything touches the filesystem.
/// Running this again with the same arguments rewrites identical content.
pub fn generate(element_type: &str, destination: &Path, package_name: &str) -> Result<PathBuf> {
    let element = ElementType::new(element_type)?;
    let package = PackageName::new(package_name)?;
    Specialization::new(element, package).write_to(destination)
}
