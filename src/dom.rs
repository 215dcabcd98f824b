use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{Bounds, Display};

/// The host document the controller reads from and writes to.
///
/// This is the seam between the headless view-model and a real UI: a browser adapter maps it to
/// DOM calls, tests map it to an in-memory tree. All geometry is in page coordinates (CSS pixels).
///
/// Writes are infallible. A host that cannot apply a write leaves the attributes out of sync with
/// the controller's state; the controller does not retry or detect this.
pub trait Dom {
    /// A cheap handle to an element.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Returns the descendants of `scope` matching `selector`, in document order.
    fn query_all(&self, scope: &Self::Node, selector: &str) -> Vec<Self::Node>;

    fn attr(&self, node: &Self::Node, name: &str) -> Option<String>;
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Sets (`Some`) or clears (`None`) the inline `display` style.
    fn set_display(&mut self, node: &Self::Node, display: Option<Display>);
    /// Sets (`Some`) or clears (`None`) the inline `height` style.
    fn set_height(&mut self, node: &Self::Node, height: Option<f32>);
    /// Sets (`Some`) or clears (`None`) the inline `z-index` style.
    fn set_z_index(&mut self, node: &Self::Node, z_index: Option<i32>);

    /// The rendered height of `node` under its current styles.
    fn content_height(&self, node: &Self::Node) -> f32;

    fn bounds(&self, node: &Self::Node) -> Bounds;
    /// The visible region of a scroll container, in page coordinates.
    fn viewport(&self, container: &Self::Node) -> Bounds;

    fn scroll_top(&self, container: &Self::Node) -> f32;
    fn set_scroll_top(&mut self, container: &Self::Node, top: f32);

    /// The element that scrolls the page (`document.scrollingElement`).
    fn default_scroll_container(&self) -> Self::Node;

    /// Fires a synthetic page scroll so scroll-positioned elements (sticky navs, fixed
    /// sidebars) re-measure while panel heights change.
    fn dispatch_scroll(&mut self);
}

pub(crate) fn is_true<D: Dom>(dom: &D, node: &D::Node, name: &str) -> bool {
    dom.attr(node, name).as_deref() == Some("true")
}

pub(crate) fn write_bool<D: Dom>(dom: &mut D, node: &D::Node, name: &str, value: bool) {
    dom.set_attr(node, name, if value { "true" } else { "false" });
}
