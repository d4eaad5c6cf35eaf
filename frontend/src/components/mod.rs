pub mod currency_visual;
pub mod navbar;
pub mod notice;
pub mod sections;
pub mod waitlist_form;

/// Scrolls the element with `id` into view. Smoothness comes from the page CSS.
pub fn scroll_to_section(id: &str) {
    if let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    {
        element.scroll_into_view();
    }
}
