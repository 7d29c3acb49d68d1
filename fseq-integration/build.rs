use std::env;
use std::path::PathBuf;

// element type, package name
const SPECIALIZATIONS: &[(&str, &str)] = &[
    ("String", "fstring"),
    ("i64", "fi64"),
    ("Point", "fpoint"),
    ("u32", "fu32"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);
    for (element, package) in SPECIALIZATIONS {
        fseq_codegen::generate(element, &out_dir, package)?;
    }
    Ok(())
}
