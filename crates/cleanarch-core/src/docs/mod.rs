//! Generated project documentation

pub mod generator;

pub use generator::{render, render_tree, write_doc, DEFAULT_DOC_FILE};
