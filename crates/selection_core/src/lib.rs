//! # selection_core
//!
//! Host-agnostic selection resolution for identifiable text fields.
//!
//! Given the identifier of one text field among possibly many on a page, the
//! resolver finds the matching element, hardens it against autofill
//! heuristics and reports the user's current selection inside it:
//! - [`ElementKey`]: Comparable identifier derived from a raw string or a
//!   serialized structured token
//! - [`SelectionOffsets`]: A normalized `{start, end}` character offset pair
//! - [`SelectionHost`]: The capabilities the resolver needs from a document
//! - [`resolve`]: The query itself, returning [`SelectionResult`]
//!
//! ## Design Principles
//!
//! This crate does not depend on `web-sys`, `wasm-bindgen` or any live
//! document. Everything it reads comes through [`SelectionHost`], so the
//! same logic runs against the browser DOM and against an in-memory
//! document in tests.
//!
//! The query never fails. Every miss (unknown identifier, malformed token,
//! no selection, selection owned by other content) collapses to `None`.

mod config;
mod event;
mod host;
mod key;
mod offsets;
mod resolve;

pub use config::{CollapsedPolicy, ConfigError, ResolverConfig};
pub use event::EventSelection;
pub use host::{HostError, RangeAnchor, SelectionHost};
pub use key::{ElementKey, KeyError};
pub use offsets::{SelectionOffsets, SelectionResult};
pub use resolve::{
    AUTOFILL_GUARD_ATTRIBUTES, Miss, harden_autofill, resolve, resolve_value, try_resolve,
};
