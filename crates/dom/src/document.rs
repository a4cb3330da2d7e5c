use std::collections::HashMap;

use selection_core::{HostError, RangeAnchor, SelectionHost};

use crate::attrs::{attr, collect_text, has_text_selection_api, set_attr};
use crate::traverse::{
    assign_node_ids, elements_by_tag_name, find_node_by_id, find_node_by_id_mut, nearest_element,
    parent_and_index,
};
use crate::{Id, Node};

/// A document tree plus the selection state a browser would keep for it.
///
/// Two pieces of selection state are tracked separately, as in a browser:
/// - the document selection, reduced to the (container, offset) boundary its
///   first range starts at
/// - each text control's own `selectionStart`/`selectionEnd`
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    root: Node,
    range_start: Option<(Id, u32)>,
    control_offsets: HashMap<Id, (u32, u32)>,
}

impl MemoryDocument {
    /// Wrap `root`, assigning ids to nodes that still carry `Id(0)`.
    pub fn new(mut root: Node) -> Self {
        assign_node_ids(&mut root);
        Self {
            root,
            range_start: None,
            control_offsets: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn node(&self, id: Id) -> Option<&Node> {
        find_node_by_id(&self.root, id)
    }

    pub fn attr(&self, id: Id, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| attr(n, name))
    }

    /// Select `start..end` inside a text control, the way a user drag would:
    /// the control's native offsets change and the document range starts at
    /// (parent, index of the control), which is what a browser reports.
    ///
    /// Offsets are clamped to the control's value length in UTF-16 units.
    /// Returns `false` if `id` is not a text control with a parent.
    pub fn select_in_control(&mut self, id: Id, start: u32, end: u32) -> bool {
        let Some(boundary) = parent_and_index(&self.root, id) else {
            return false;
        };
        if !self.set_control_offsets(id, start, end) {
            return false;
        }
        self.range_start = Some(boundary);
        true
    }

    /// Change a control's native offsets without touching the document range.
    pub fn set_control_offsets(&mut self, id: Id, start: u32, end: u32) -> bool {
        let Some(node) = self.node(id).filter(|n| has_text_selection_api(n)) else {
            return false;
        };

        let mut value = String::new();
        collect_text(node.children(), &mut value);
        let len = u32::try_from(value.encode_utf16().count()).unwrap_or(u32::MAX);

        self.control_offsets.insert(id, (start.min(len), end.min(len)));
        true
    }

    /// Start the document range at (`container`, `offset`). For a text
    /// container the offset counts characters, otherwise it indexes children.
    pub fn set_range_start(&mut self, container: Id, offset: u32) -> bool {
        if self.node(container).is_none() {
            return false;
        }
        self.range_start = Some((container, offset));
        true
    }

    pub fn clear_selection(&mut self) {
        self.range_start = None;
    }
}

impl SelectionHost for MemoryDocument {
    type Element = Id;

    fn candidates(&self, tag: &str) -> Vec<Id> {
        elements_by_tag_name(&self.root, tag)
    }

    fn attribute(&self, element: &Id, name: &str) -> Option<String> {
        self.attr(*element, name).map(str::to_string)
    }

    fn set_attribute(&mut self, element: &Id, name: &str, value: &str) -> Result<(), HostError> {
        let written = find_node_by_id_mut(&mut self.root, *element)
            .is_some_and(|node| set_attr(node, name, value));
        if !written {
            return Err(HostError::SetAttribute {
                name: name.to_string(),
                message: format!("node {} is not an element", element.0),
            });
        }
        log::trace!(target: "dom", "node {}: {name}={value:?}", element.0);
        Ok(())
    }

    fn range_anchor(&self) -> Option<RangeAnchor<Id>> {
        let (container, offset) = self.range_start?;
        let boundary = self
            .node(container)?
            .children()
            .get(offset as usize)
            .map_or(container, Node::id);
        Some(RangeAnchor {
            owner: nearest_element(&self.root, boundary),
            start_offset: offset,
        })
    }

    fn is_same_element(&self, a: &Id, b: &Id) -> bool {
        a == b
    }

    fn native_offsets(&self, element: &Id) -> Option<(u32, u32)> {
        let node = self.node(*element)?;
        if !has_text_selection_api(node) {
            return None;
        }
        Some(self.control_offsets.get(element).copied().unwrap_or((0, 0)))
    }
}
