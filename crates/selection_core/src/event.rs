//! Selections carried by listener events.
//!
//! Event-listener wrappers forward a flat payload of dotted property paths
//! read from the event's source element. This is an alternative to querying
//! the document: the offsets arrive with the event.

use serde::Deserialize;

use crate::config::CollapsedPolicy;
use crate::offsets::{SelectionOffsets, SelectionResult};

/// Payload of a `select`/`mouseup`/`keyup`/`focusout` event on a text field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct EventSelection {
    #[serde(rename = "srcElement.selectionStart", default)]
    pub selection_start: Option<u32>,
    #[serde(rename = "srcElement.selectionEnd", default)]
    pub selection_end: Option<u32>,
    /// Identifier attribute of the element that fired the event.
    #[serde(rename = "srcElement.id", default)]
    pub source_id: Option<String>,
}

impl EventSelection {
    /// Offsets reported by the event, subject to `policy` for carets.
    ///
    /// Events from elements without a text selection API carry no offsets and
    /// yield `None`.
    pub fn to_result(&self, policy: CollapsedPolicy) -> SelectionResult {
        let (Some(start), Some(end)) = (self.selection_start, self.selection_end) else {
            return None;
        };
        let offsets = SelectionOffsets::new(start, end);
        if offsets.is_collapsed() && policy == CollapsedPolicy::Suppress {
            return None;
        }
        Some(offsets)
    }
}
