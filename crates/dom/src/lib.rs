//! In-memory document model.
//!
//! A small element tree with a document-level selection and per-control
//! native selection offsets, implementing [`selection_core::SelectionHost`].
//! It stands in for the browser DOM in tests, fuzzing and native embedders.

pub mod attrs;
pub mod build;
pub mod traverse;

mod document;
mod types;

pub use document::MemoryDocument;
pub use types::{Id, Node, NodeId};
