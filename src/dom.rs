//! Small wrappers over the browser APIs the components need. Every function
//! tolerates a missing window or document and reports that as `None`.

use log::debug;
use web_sys::{window, Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::nav::gooey::Rect;
use crate::nav::visibility::ScrollMetrics;

/// Wall clock in milliseconds, used as the animation time base.
pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

pub fn scroll_metrics() -> Option<ScrollMetrics> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let document_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(viewport_height);
    Some(ScrollMetrics {
        scroll_y,
        viewport_height,
        document_height,
    })
}

/// Smooth-scrolls the element with `id` into view, if it exists.
pub fn scroll_to_section(id: &str) {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("No section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// The URL fragment including its `#`, when there is one.
pub fn current_fragment() -> Option<String> {
    let hash = window()?.location().hash().ok()?;
    (!hash.is_empty()).then_some(hash)
}

/// Bounding box of `item` relative to `container`. `None` when either is not
/// laid out (for instance hidden on small screens).
pub fn relative_rect(item: &Element, container: &Element) -> Option<Rect> {
    let item_box = item.get_bounding_client_rect();
    let container_box = container.get_bounding_client_rect();
    if item_box.width() <= 0.0 || item_box.height() <= 0.0 {
        return None;
    }
    Some(Rect::new(
        item_box.left() - container_box.left(),
        item_box.top() - container_box.top(),
        item_box.width(),
        item_box.height(),
    ))
}
