use crate::Node;

pub fn attr<'a>(node: &'a Node, name: &str) -> Option<&'a str> {
    match node {
        Node::Element { attributes, .. } => attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref()),
        _ => None,
    }
}

/// Set (or overwrite) an attribute. Returns `false` if `node` is not an element.
pub fn set_attr(node: &mut Node, name: &str, value: &str) -> bool {
    let Node::Element { attributes, .. } = node else {
        return false;
    };

    match attributes
        .iter_mut()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
    {
        Some((_, v)) => *v = Some(value.to_string()),
        None => attributes.push((name.to_string(), Some(value.to_string()))),
    }
    true
}

pub fn collect_text(nodes: &[Node], out: &mut String) {
    for n in nodes {
        match n {
            Node::Text { text, .. } => out.push_str(text),
            Node::Element { children, .. } | Node::Document { children, .. } => {
                collect_text(children, out);
            }
        }
    }
}

/// Whether the element exposes `selectionStart`/`selectionEnd`.
///
/// True for `<textarea>` and for `<input>` of the text-like types; other
/// input types (checkbox, number, ...) have no text selection.
pub fn has_text_selection_api(node: &Node) -> bool {
    let Node::Element { name, .. } = node else {
        return false;
    };

    if name.eq_ignore_ascii_case("textarea") {
        return true;
    }
    if !name.eq_ignore_ascii_case("input") {
        return false;
    }

    match attr(node, "type").map(str::trim).filter(|s| !s.is_empty()) {
        None => true, // missing type defaults to text
        Some(t) => ["text", "search", "url", "tel", "password"]
            .iter()
            .any(|ty| t.eq_ignore_ascii_case(ty)),
    }
}
