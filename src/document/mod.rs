//! Document export
//!
//! This module wraps encoded regions as SVG documents and decides where
//! those documents are written.

pub mod naming;
pub mod svg;

pub use naming::OutputNaming;
pub use svg::{inspect_document, wrap_as_document, wrap_encoded, DocumentExporter, DocumentInfo};
