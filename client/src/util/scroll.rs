//! Smooth "bring into view" for the conversation's end sentinel.
//!
//! Requires a browser environment; a no-op during SSR.

/// Scroll `element` into view with smooth behavior, aligned to the bottom
/// of its scroll container.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view_smooth(element: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::End);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Scroll the node behind `node_ref` into view if it is mounted.
pub fn follow_newest(node_ref: leptos::prelude::NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;
        if let Some(el) = node_ref.get_untracked() {
            scroll_into_view_smooth(&el);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node_ref;
    }
}
