//! Builders for small documents.

use crate::{Id, Node};

pub fn doc(children: Vec<Node>) -> Node {
    Node::Document {
        id: Id(0),
        children,
    }
}

pub fn elem(
    id: u32,
    name: &str,
    attributes: Vec<(&str, Option<&str>)>,
    children: Vec<Node>,
) -> Node {
    Node::Element {
        id: Id(id),
        name: name.to_string(),
        attributes: attributes
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect(),
        children,
    }
}

pub fn text(id: u32, text: &str) -> Node {
    Node::Text {
        id: Id(id),
        text: text.to_string(),
    }
}

pub fn div(id: u32, children: Vec<Node>) -> Node {
    elem(id, "div", Vec::new(), children)
}

/// A `<textarea>` whose `id` attribute is `id_attr` and whose content is `value`.
///
/// The value becomes a child text node, as in a parsed document.
pub fn textarea(id: u32, id_attr: &str, value: &str) -> Node {
    let children = if value.is_empty() {
        Vec::new()
    } else {
        vec![text(0, value)]
    };
    elem(id, "textarea", vec![("id", Some(id_attr))], children)
}

pub fn input(id: u32, ty: &str, id_attr: &str) -> Node {
    elem(
        id,
        "input",
        vec![("type", Some(ty)), ("id", Some(id_attr))],
        Vec::new(),
    )
}
