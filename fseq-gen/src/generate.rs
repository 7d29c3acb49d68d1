use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fseq_codegen::{ElementType, PackageName, Specialization};

#[derive(Debug, Parser)]
pub(crate) struct Generate {
    /// Element type to specialize to, for instance `String` or `i64`.
    /// It has to be in scope in the module that declares the generated one.
    pub(crate) element_type: String,
    /// Directory to write to. Created if missing.
    #[arg(short, long, default_value = ".")]
    pub(crate) out: PathBuf,
    /// Module name of the generated package.
    /// Defaults to `f` followed by the lowercased element type.
    #[arg(short, long)]
    pub(crate) package: Option<String>,
}

impl Generate {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let specialization = specialization(&self.element_type, self.package.as_deref())?;
        let path = specialization
            .write_to(&self.out)
            .with_context(|| {
                format!(
                    "Cannot generate package `{}` for element type `{}`",
                    specialization.package(),
                    specialization.element()
                )
            })?;
        println!("{}", path.display());
        Ok(())
    }
}

/// Validate the names given on the command line.
pub(crate) fn specialization(
    element_type: &str,
    package: Option<&str>,
) -> anyhow::Result<Specialization> {
    let element = ElementType::new(element_type)?;
    let specialization = match package {
        Some(package) => Specialization::new(element, PackageName::new(package)?),
        None => Specialization::with_default_package(element)
            .context("Cannot derive a package name, use --package")?,
    };
    Ok(specialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_package() {
        let specialization = specialization("String", None).unwrap();
        assert_eq!(specialization.file_name(), "fstring.rs");
    }

    #[test]
    fn test_explicit_package() {
        let specialization = specialization("String", Some("text")).unwrap();
        assert_eq!(specialization.file_name(), "text.rs");
    }

    #[test]
    fn test_keyword_default_package_needs_override() {
        let err = specialization("Or", None).unwrap_err();
        assert!(err.to_string().contains("--package"));
        assert!(specialization("Or", Some("for_or")).is_ok());
    }

    #[test]
    fn test_run_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let generate = Generate {
            element_type: "i64".to_string(),
            out: dir.path().join("nested"),
            package: None,
        };
        generate.run().unwrap();
        assert!(dir.path().join("nested").join("fi64.rs").is_file());
    }

    #[test]
    fn test_run_error_names_package_and_element() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let generate = Generate {
            element_type: "i64".to_string(),
            out: blocker,
            package: None,
        };
        let err = generate.run().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot generate package `fi64` for element type `i64`"
        );
    }

    #[test]
    fn test_run_rejects_invalid_type() {
        let dir = tempfile::tempdir().unwrap();
        let generate = Generate {
            element_type: "1abc".to_string(),
            out: dir.path().join("nested"),
            package: None,
        };
        assert!(generate.run().is_err());
        assert!(!dir.path().join("nested").exists());
    }
}
