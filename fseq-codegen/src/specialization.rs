use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::name::{ElementType, PackageName};
use crate::render::render;

/// A validated request to specialize the sequence module to one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specialization {
    element: ElementType,
    package: PackageName,
}

impl Specialization {
    pub fn new(element: ElementType, package: PackageName) -> Self {
        Self { element, package }
    }

    /// Specialize to `element`, naming the package after it.
    pub fn with_default_package(element: ElementType) -> Result<Self> {
        let package = element.default_package()?;
        Ok(Self { element, package })
    }

    pub fn element(&self) -> &ElementType {
        &self.element
    }

    pub fn package(&self) -> &PackageName {
        &self.package
    }

    pub fn render(&self) -> String {
        render(&self.element, &self.package)
    }

    pub fn file_name(&self) -> String {
        self.package.file_name()
    }

    /// Write the rendered module to `<destination>/<package>.rs`, creating
    /// `destination` if needed. An existing file is overwritten.
    ///
    /// If this fails the file may have been partially written.
    pub fn write_to(&self, destination: &Path) -> Result<PathBuf> {
        let source = self.render();
        fs::create_dir_all(destination).map_err(Error::io(destination))?;
        let path = destination.join(self.file_name());
        // the handle is closed on every path out of this block
        {
            let file = File::create(&path).map_err(Error::io(&path))?;
            let mut writer = BufWriter::new(file);
            writer
                .write_all(source.as_bytes())
                .map_err(Error::io(&path))?;
            writer.flush().map_err(Error::io(&path))?;
        }
        tracing::info!(
            element = %self.element,
            package = %self.package,
            path = %path.display(),
            bytes = source.len(),
            "wrote sequence module"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_specialization() -> Specialization {
        Specialization::with_default_package(ElementType::new("String").unwrap()).unwrap()
    }

    #[test]
    fn test_file_name() {
        assert_eq!(string_specialization().file_name(), "fstring.rs");
    }

    #[test]
    fn test_explicit_package() {
        let specialization = Specialization::new(
            ElementType::new("String").unwrap(),
            PackageName::new("strings").unwrap(),
        );
        assert_eq!(specialization.file_name(), "strings.rs");
        assert!(specialization.render().contains("// package: strings"));
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("src").join("somebin");
        let path = string_specialization().write_to(&destination).unwrap();
        assert_eq!(path, destination.join("fstring.rs"));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, string_specialization().render());
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fstring.rs");
        fs::write(&path, "stale").unwrap();
        string_specialization().write_to(dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            string_specialization().render()
        );
    }

    #[test]
    fn test_write_into_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let err = string_specialization().write_to(&blocker).unwrap_err();
        assert!(!err.is_validation());
        assert!(matches!(err, Error::Io { path, .. } if path == blocker));
    }
}
