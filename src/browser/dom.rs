//! Live DOM as a [`ScrollTree`], plus small query helpers.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::UiError;
use crate::scroll::{Offset, Overflow, ScrollTree};

/// Reads computed style and scroll state straight from the document.
#[derive(Clone)]
pub struct DomTree {
    window: Window,
    document: Document,
}

impl DomTree {
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }

    fn computed(&self, node: &Element, property: &str) -> Option<String> {
        match self.window.get_computed_style(node) {
            Ok(Some(style)) => match style.get_property_value(property) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::debug!("computed {property} unavailable: {e:?}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::debug!("computed style unavailable: {e:?}");
                None
            }
        }
    }
}

impl ScrollTree for DomTree {
    type Node = Element;

    fn parent_element(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn overflow(&self, node: &Element) -> (Overflow, Overflow) {
        let axis = |property| self.computed(node, property).map_or(Overflow::Visible, |v| Overflow::parse(&v));
        (axis("overflow-x"), axis("overflow-y"))
    }

    fn scroll_position(&self, node: &Element) -> Offset {
        Offset::new(f64::from(node.scroll_left()), f64::from(node.scroll_top()))
    }

    fn is_document_root(&self, node: &Element) -> bool {
        let node: &JsValue = node.as_ref();
        let body = self.document.body().map(JsValue::from);
        let root = self.document.document_element().map(JsValue::from);
        body.as_ref() == Some(node) || root.as_ref() == Some(node)
    }

    fn rendered_height(&self, node: &Element) -> f64 {
        rendered_height(node)
    }
}

/// `offsetHeight` for HTML elements, `clientHeight` otherwise.
pub fn rendered_height(node: &Element) -> f64 {
    match node.dyn_ref::<HtmlElement>() {
        Some(html) => f64::from(html.offset_height()),
        None => f64::from(node.client_height()),
    }
}

/// Collect the elements of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Every element in `document` matching `selector`.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Set one inline style property on an element.
pub fn set_style(node: &Element, property: &str, value: &str) -> Result<(), UiError> {
    match node.dyn_ref::<HtmlElement>() {
        Some(html) => Ok(html.style().set_property(property, value)?),
        None => Ok(()),
    }
}
