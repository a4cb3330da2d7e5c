//! Selection offsets reported back to the host.

use serde::Serialize;

/// A text selection as a pair of character offsets into a field's value.
///
/// The pair is always normalized such that `start <= end`; the only way to
/// build one is [`SelectionOffsets::new`]. Offsets are the field's own native
/// selection indices (UTF-16 code units in browsers).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SelectionOffsets {
    start: u32,
    end: u32,
}

/// What the resolver hands back to the host.
///
/// `None` means there is nothing to report this time. It serializes to `null`.
pub type SelectionResult = Option<SelectionOffsets>;

impl SelectionOffsets {
    /// Create a new offset pair.
    ///
    /// The pair is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Start offset of the selection (inclusive).
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// End offset of the selection (exclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns `true` if the selection is collapsed (a caret, no text).
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

impl From<(u32, u32)> for SelectionOffsets {
    #[inline]
    fn from((a, b): (u32, u32)) -> Self {
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_normalize() {
        let offsets = SelectionOffsets::new(9, 4);
        assert_eq!(offsets.start(), 4);
        assert_eq!(offsets.end(), 9);
    }

    #[test]
    fn offsets_collapsed() {
        let caret = SelectionOffsets::new(3, 3);
        assert!(caret.is_collapsed());

        let span = SelectionOffsets::from((7, 2));
        assert!(!span.is_collapsed());
        assert_eq!((span.start(), span.end()), (2, 7));
    }

    #[test]
    fn result_serializes_to_mapping_or_null() {
        let some: SelectionResult = Some(SelectionOffsets::new(2, 5));
        assert_eq!(
            serde_json::to_value(some).unwrap(),
            serde_json::json!({ "start": 2, "end": 5 })
        );

        let none: SelectionResult = None;
        assert_eq!(serde_json::to_value(none).unwrap(), serde_json::Value::Null);
    }
}
