//! Validate the WGSL shaders at build time.
//!
//! The stages compile their shaders from source files at runtime, this pass
//! only ensures a malformed file fails the build instead of the first run.

use std::path::Path;

use naga::valid::{Capabilities, ValidationFlags, Validator};

/// Parse and validate a single WGSL file.
fn validate_wgsl(source: impl AsRef<Path>) {
    let source = source.as_ref();

    // Read the source WGSL
    let shader = std::fs::read_to_string(source).expect("Error reading WGSL shader file");

    // Parse into a NAGA module
    let module = naga::front::wgsl::parse_str(&shader)
        .unwrap_or_else(|error| panic!("Error parsing '{}': {error}", source.display()));

    // Validate the parsed module
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|error| panic!("Error validating '{}': {error}", source.display()));
}

/// Validate every WGSL file in the directory and its subdirectories.
fn validate_dir(dir: &Path) {
    for entry in std::fs::read_dir(dir).expect("Error reading shader directory") {
        let path = entry.expect("Error reading shader directory entry").path();

        if path.is_dir() {
            validate_dir(&path);
        } else if path.extension().is_some_and(|extension| extension == "wgsl") {
            validate_wgsl(&path);
        }
    }
}

fn main() {
    // Rerun build script if shaders changed
    println!("cargo::rerun-if-changed=shaders");

    validate_dir(Path::new("shaders"));
}
