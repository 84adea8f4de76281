//! oopgen: object-oriented program assembler
//!
//! Builds class/interface programs from structured declarations and emits
//! equivalent Java source text.
//!
//! ## Architecture
//!
//! - **model**: declaration tree (classes, interfaces and their members)
//! - **registry**: class/interface namespaces, collision-free naming, rename propagation
//! - **review**: interface conformance and `extends` resolution
//! - **emit**: source text generation
//! - **bin**: command-line interface
//!
//! ## Generation Flow
//!
//! ```text
//! Editor snapshot → Program → Review → Emit → Java source
//!                      ↑
//!                  Registry (propose / rename)
//! ```

pub mod config;
pub mod consts;
pub mod emit;
pub mod error;
pub mod model;
pub mod registry;
pub mod review;

pub use config::Config;
pub use error::{Error, Result};
pub use model::Program;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Emit a program after checking the configuration.
///
/// Conformance failures are not errors here: they appear in the text as
/// diagnostics in place of the offending declarations.
pub fn generate(program: &Program, config: &Config) -> Result<String> {
    config.validate()?;
    Ok(emit::emit_program(program, config))
}

/// Load a JSON program snapshot from disk
pub fn load_program(path: impl AsRef<Path>) -> Result<Program> {
    let path = path.as_ref();
    log::debug!("loading snapshot {}", path.display());
    let source = std::fs::read_to_string(path)?;
    Program::from_json(&source)
}

/// Write a JSON program snapshot to disk
pub fn save_program(program: &Program, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, program.to_json()?)?;
    Ok(())
}

/// Snapshot files under `path`: the path itself when it is a file, otherwise
/// every `*.json` file below it in sorted order
pub fn snapshot_paths(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && entry.path().extension().is_some_and(|e| e == "json") {
            paths.push(entry.into_path());
        }
    }
    log::debug!("found {} snapshots under {}", paths.len(), path.display());
    Ok(paths)
}

/// Load a snapshot file and emit it
pub fn generate_file(path: impl AsRef<Path>, config: &Config) -> Result<String> {
    let program = load_program(path)?;
    generate(&program, config)
}
