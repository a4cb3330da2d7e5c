use selection_core::{HostError, RangeAnchor, SelectionHost};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Window};

/// The live browser document.
#[derive(Clone, Debug)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    /// The document of the current window, if running in one.
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

impl SelectionHost for WebDocument {
    type Element = Element;

    fn candidates(&self, tag: &str) -> Vec<Element> {
        let collection = self.document.get_elements_by_tag_name(tag);
        (0..collection.length())
            .filter_map(|i| collection.item(i))
            .collect()
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(
        &mut self,
        element: &Element,
        name: &str,
        value: &str,
    ) -> Result<(), HostError> {
        element
            .set_attribute(name, value)
            .map_err(|err| HostError::SetAttribute {
                name: name.to_string(),
                message: describe(&err),
            })
    }

    fn range_anchor(&self) -> Option<RangeAnchor<Element>> {
        let selection = self.window.get_selection().ok()??;
        if selection.range_count() == 0 {
            return None;
        }
        let range = selection.get_range_at(0).ok()?;
        let container = range.start_container().ok()?;
        let start_offset = range.start_offset().ok()?;
        // A control selection starts at (parent, index of the control). Text
        // containers have no children and resolve to themselves.
        let boundary = container
            .child_nodes()
            .item(start_offset)
            .unwrap_or(container);
        let owner = match boundary.dyn_into::<Element>() {
            Ok(element) => Some(element),
            Err(node) => node.parent_element(),
        };
        Some(RangeAnchor {
            owner,
            start_offset,
        })
    }

    fn is_same_element(&self, a: &Element, b: &Element) -> bool {
        a.is_same_node(Some(b.as_ref()))
    }

    fn native_offsets(&self, element: &Element) -> Option<(u32, u32)> {
        if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            return pair(area.selection_start(), area.selection_end());
        }
        // Non-text input types throw on access; that reads as "no offsets".
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return pair(input.selection_start(), input.selection_end());
        }
        None
    }
}

fn pair(
    start: Result<Option<u32>, JsValue>,
    end: Result<Option<u32>, JsValue>,
) -> Option<(u32, u32)> {
    Some((start.ok()??, end.ok()??))
}

pub(crate) fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
