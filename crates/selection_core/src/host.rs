//! Host trait defining what the resolver reads from (and writes to) a document.
//!
//! The resolver never touches a DOM directly. A browser build implements this
//! trait over `web-sys`; tests and native embedders implement it over an
//! in-memory tree.
//!
//! # Design Principles
//!
//! - `Element` is an opaque handle chosen by the host; identity is decided by
//!   [`SelectionHost::is_same_element`], never by comparing contents
//! - Reads take `&self`; only attribute writes need `&mut self`
//! - The host reports raw facts. Matching, ownership and policy decisions
//!   live in the resolver

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("failed to set attribute `{name}`: {message}")]
    SetAttribute { name: String, message: String },
}

/// Where the document's active selection range starts.
///
/// A range boundary is a (container, offset) pair. For a character container
/// (text) the offset counts characters; for any other container it indexes
/// the container's children. A selection inside a `<textarea>` or `<input>`
/// is reported by the platform as (parent element, index of the control),
/// since the control's own text is not reachable from a page range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RangeAnchor<E> {
    /// Nearest element (inclusive) of the node at the start boundary: the
    /// container's child at `start_offset` when there is one, otherwise the
    /// container itself.
    ///
    /// `None` when that node has no element ancestor, e.g. the document node.
    pub owner: Option<E>,
    /// Offset of the start boundary within its container.
    pub start_offset: u32,
}

pub trait SelectionHost {
    type Element;

    /// Elements with the given tag name, in document order.
    fn candidates(&self, tag: &str) -> Vec<Self::Element>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(
        &mut self,
        element: &Self::Element,
        name: &str,
        value: &str,
    ) -> Result<(), HostError>;

    /// The first range of the document's selection, if the selection has one.
    fn range_anchor(&self) -> Option<RangeAnchor<Self::Element>>;

    fn is_same_element(&self, a: &Self::Element, b: &Self::Element) -> bool;

    /// The element's own `selectionStart`/`selectionEnd`, if it exposes them.
    fn native_offsets(&self, element: &Self::Element) -> Option<(u32, u32)>;
}
