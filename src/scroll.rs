//! Scroll-offset resolution over an element's ancestor chain.
//!
//! [`resolve`] walks from a target's parent up to the document root and sums
//! the scroll displacement of every ancestor whose computed overflow lets it
//! scroll. The tree is read through the [`ScrollTree`] snapshot trait so the
//! walk runs the same against the live DOM and against a synthetic tree.
//!
//! The body and `<html>` elements contribute to the totals but are never
//! reported as scrollable ancestors: document-level scroll and resize
//! listeners already cover them.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Computed `overflow-x` / `overflow-y` keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Auto,
    Scroll,
}

impl Overflow {
    /// Parse a computed-style keyword. Anything unrecognized is `Visible`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "hidden" => Self::Hidden,
            "clip" => Self::Clip,
            "auto" => Self::Auto,
            "scroll" => Self::Scroll,
            _ => Self::Visible,
        }
    }

    /// Whether this axis scrolls independently of the page.
    #[must_use]
    pub fn is_scrollable(self) -> bool {
        matches!(self, Self::Auto | Self::Scroll)
    }
}

/// Horizontal/vertical displacement in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Accumulated scroll of a target's ancestors.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollOffset<N> {
    pub offset: Offset,
    /// Scrollable ancestors, nearest first, excluding body and `<html>`.
    pub ancestors: Vec<N>,
}

impl<N> Default for ScrollOffset<N> {
    fn default() -> Self {
        Self { offset: Offset::default(), ancestors: Vec::new() }
    }
}

/// Read-only view of a rendered element tree.
pub trait ScrollTree {
    type Node: Clone;

    /// Parent element, or `None` once the walk leaves the element tree.
    fn parent_element(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Computed `(overflow-x, overflow-y)`.
    fn overflow(&self, node: &Self::Node) -> (Overflow, Overflow);

    /// Current `(scrollLeft, scrollTop)`.
    fn scroll_position(&self, node: &Self::Node) -> Offset;

    /// True for the document body and the root `<html>` element.
    fn is_document_root(&self, node: &Self::Node) -> bool;

    /// Rendered height in CSS pixels; zero for hidden elements.
    fn rendered_height(&self, node: &Self::Node) -> f64;
}

/// Sum the scroll offsets of `target`'s scrollable ancestors.
pub fn resolve<T: ScrollTree + ?Sized>(tree: &T, target: &T::Node) -> ScrollOffset<T::Node> {
    let mut result = ScrollOffset::default();
    let mut current = tree.parent_element(target);

    while let Some(node) = current {
        let (overflow_x, overflow_y) = tree.overflow(&node);
        let position = tree.scroll_position(&node);
        let mut scrolls = false;

        if overflow_x.is_scrollable() {
            result.offset.x += position.x;
            scrolls = true;
        }
        if overflow_y.is_scrollable() {
            result.offset.y += position.y;
            scrolls = true;
        }
        if scrolls && !tree.is_document_root(&node) {
            result.ancestors.push(node.clone());
        }

        current = tree.parent_element(&node);
    }

    result
}
