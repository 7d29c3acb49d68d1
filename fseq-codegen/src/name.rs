use std::fmt;

use proc_macro2::Ident;
use syn::ext::IdentExt;

use crate::error::{Error, Result};
use crate::render::GENERATED_TYPE_NAMES;

/// The concrete type a generated module is specialized to.
///
/// Must be a single Rust identifier that is not a keyword, such as `String`,
/// `i64` or `Point`. Whether the type exists, and implements `Clone`, is only
/// known once the generated module is compiled. The generated items are
/// public, so the type must be at least `pub(crate)` in the parent module;
/// a private type fails to compile with E0446.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementType {
    ident: Ident,
}

impl ElementType {
    pub fn new(name: &str) -> Result<Self> {
        let ident =
            parse_identifier(name).ok_or_else(|| Error::InvalidElementType(name.to_string()))?;
        // inside the generated module these names refer to the module's own
        // items, so the element type would be shadowed
        if GENERATED_TYPE_NAMES.contains(&ident.unraw().to_string().as_str()) {
            return Err(Error::ReservedElementType(name.to_string()));
        }
        Ok(ElementType { ident })
    }

    pub(crate) fn ident(&self) -> &Ident {
        &self.ident
    }

    /// The package name used when none is given: `f` followed by the
    /// lowercased type name, so `String` becomes `fstring`.
    ///
    /// This can fail when the result is a keyword (`Or` gives `for`).
    pub fn default_package(&self) -> Result<PackageName> {
        let name = format!("f{}", self.ident.unraw().to_string().to_lowercase());
        PackageName::new(&name)
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ident, f)
    }
}

/// The name of a generated module; also the stem of the file it is written to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName {
    ident: Ident,
}

impl PackageName {
    pub fn new(name: &str) -> Result<Self> {
        let ident =
            parse_identifier(name).ok_or_else(|| Error::InvalidPackageName(name.to_string()))?;
        Ok(PackageName { ident })
    }

    /// The file the module is written to, `<name>.rs`.
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.ident.unraw())
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.ident, f)
    }
}

fn parse_identifier(name: &str) -> Option<Ident> {
    // syn rejects keywords, literals and multiple tokens, but it skips
    // surrounding whitespace, so the round trip has to match too
    let ident: Ident = syn::parse_str(name).ok()?;
    (ident == name).then_some(ident)
}
