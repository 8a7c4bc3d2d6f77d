//! Output naming.

use roughlify::Scope;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub(crate) path: PathBuf,
    pub(crate) scope: Scope,
    /// The input name had no extension; the output falls back to HTML.
    pub(crate) fallback: bool,
}

/// `drawing.svg` -> `drawing.rough.svg`. SVG inputs keep only the body content (the drawing
/// itself); anything else is written as a full document. Names without an extension get
/// `.rough.html`.
pub(crate) fn derive(file_name: &str) -> Target {
    let path = Path::new(file_name);
    match (path.file_stem(), path.extension()) {
        (Some(stem), Some(ext)) => {
            let ext = ext.to_string_lossy();
            let scope = if ext == "svg" {
                Scope::Body
            } else {
                Scope::Document
            };
            Target {
                path: path.with_file_name(format!("{}.rough.{ext}", stem.to_string_lossy())),
                scope,
                fallback: false,
            }
        }
        _ => Target {
            path: PathBuf::from(format!("{file_name}.rough.html")),
            scope: Scope::Document,
            fallback: true,
        },
    }
}
