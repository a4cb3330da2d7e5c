use crate::{Id, Node};

/// Give every node still carrying `Id(0)` a fresh id, in document order.
///
/// Ids already assigned are kept; fresh ids start above the largest one seen.
pub fn assign_node_ids(root: &mut Node) {
    fn max_id(node: &Node) -> u32 {
        node.children()
            .iter()
            .map(max_id)
            .fold(node.id().0, u32::max)
    }

    fn walk(node: &mut Node, next: &mut u32) {
        if node.id() == Id(0) {
            node.set_id(Id(*next));
            *next = next.wrapping_add(1);
        }

        match node {
            Node::Document { children, .. } | Node::Element { children, .. } => {
                for c in children {
                    walk(c, next);
                }
            }
            Node::Text { .. } => {}
        }
    }

    let mut next = max_id(root).wrapping_add(1).max(1);
    // The root keeps Id(0) when it is the document.
    if let Node::Document { children, .. } = root {
        for c in children {
            walk(c, &mut next);
        }
    } else {
        walk(root, &mut next);
    }
}

pub fn find_node_by_id(node: &Node, id: Id) -> Option<&Node> {
    if node.id() == id {
        return Some(node);
    }
    node.children()
        .iter()
        .find_map(|c| find_node_by_id(c, id))
}

pub fn find_node_by_id_mut(node: &mut Node, id: Id) -> Option<&mut Node> {
    if node.id() == id {
        return Some(node);
    }
    match node {
        Node::Document { children, .. } | Node::Element { children, .. } => children
            .iter_mut()
            .find_map(|c| find_node_by_id_mut(c, id)),
        Node::Text { .. } => None,
    }
}

/// Nodes from `root` down to the node with `id`, both ends included.
pub fn path_to(root: &Node, id: Id) -> Option<Vec<&Node>> {
    fn walk<'a>(node: &'a Node, id: Id, path: &mut Vec<&'a Node>) -> bool {
        path.push(node);
        if node.id() == id {
            return true;
        }
        for c in node.children() {
            if walk(c, id, path) {
                return true;
            }
        }
        path.pop();
        false
    }

    let mut path = Vec::new();
    walk(root, id, &mut path).then_some(path)
}

/// Parent of the node with `id` and the node's index among the parent's children.
pub fn parent_and_index(root: &Node, id: Id) -> Option<(Id, u32)> {
    let path = path_to(root, id)?;
    let parent = path.len().checked_sub(2).map(|i| path[i])?;
    let index = parent.children().iter().position(|c| c.id() == id)?;
    Some((parent.id(), u32::try_from(index).ok()?))
}

/// The node itself if it is an element, otherwise its closest element ancestor.
pub fn nearest_element(root: &Node, id: Id) -> Option<Id> {
    path_to(root, id)?
        .into_iter()
        .rev()
        .find(|n| n.is_element())
        .map(Node::id)
}

/// Elements named `tag` (ASCII case-insensitive), in document order.
pub fn elements_by_tag_name(root: &Node, tag: &str) -> Vec<Id> {
    fn walk(node: &Node, tag: &str, out: &mut Vec<Id>) {
        if let Node::Element { id, name, .. } = node
            && name.eq_ignore_ascii_case(tag)
        {
            out.push(*id);
        }
        for c in node.children() {
            walk(c, tag, out);
        }
    }

    let mut out = Vec::new();
    walk(root, tag, &mut out);
    out
}
