#![forbid(unsafe_code)]

//! Shape-to-sketchy-stroke transformation pipeline (renderer-agnostic).
//!
//! Walks a vector document, decodes each geometric primitive (`path`, `line`, `circle`, `rect`,
//! `ellipse`, `polygon`, `polyline`) and re-renders it through a [`Sketcher`], keeping the
//! attributes of every drawable root.
//!
//! Design goals:
//! - the input tree is never mutated; output roots are fresh trees
//! - malformed shapes are skipped, never fatal
//! - global style options always win over per-element attributes

pub mod attributes;
pub mod batch;
pub mod dispatch;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod number;
pub mod options;
pub mod pretty;
pub mod sketch;
pub mod transform;
pub mod walk;

pub use batch::{Scope, roughlify_document, transform_document};
pub use dispatch::{ShapeKind, dispatch};
pub use dom::{Attributes, Document, Element, Node};
pub use error::{Error, Result};
pub use geometry::{Decoded, Geometry, Point};
pub use options::{FillStyle, StyleOptions};
pub use sketch::Sketcher;
pub use transform::{transform, transform_into};

#[cfg(test)]
mod tests;
