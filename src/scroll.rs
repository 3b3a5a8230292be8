use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::JsCast;

/// Scroll offset after which the navbar switches to its compact style.
pub const NAV_SCROLLED_OFFSET: f64 = 50.0;
/// Scroll offset after which the back-to-top button appears.
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;
/// Height of the fixed header that in-page jumps must clear.
pub const HEADER_HEIGHT: f64 = 80.0;

pub fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_OFFSET
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_OFFSET
}

/// The section whose top has passed under the header, given sections in page
/// order as `(id, offset_top)`.
pub fn active_section<'a>(sections: &[(&'a str, f64)], scroll_y: f64) -> Option<&'a str> {
    let line = scroll_y + HEADER_HEIGHT + 20.0;
    sections
        .iter()
        .take_while(|(_, top)| *top <= line)
        .last()
        .map(|(id, _)| *id)
}

pub fn section_offsets<'a>(ids: &[&'a str]) -> Vec<(&'a str, f64)> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some((*id, element.offset_top() as f64))
        })
        .collect()
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let mut options = ScrollToOptions::new();
        options.top(top.max(0.0));
        options.behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Jumps to a section by id, leaving room for the fixed header. Unknown ids
/// are ignored.
pub fn scroll_to_section(id: &str) {
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if let Some(target) = target {
        smooth_scroll_to(target.offset_top() as f64 - HEADER_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &[(&str, f64)] = &[
        ("home", 0.0),
        ("services", 800.0),
        ("projects", 1600.0),
        ("contact", 2600.0),
    ];

    #[test]
    fn navbar_compacts_after_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(50.0));
        assert!(nav_is_scrolled(51.0));
    }

    #[test]
    fn back_to_top_after_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn active_section_follows_scroll() {
        assert_eq!(active_section(SECTIONS, 0.0), Some("home"));
        assert_eq!(active_section(SECTIONS, 650.0), Some("home"));
        assert_eq!(active_section(SECTIONS, 700.0), Some("services"));
        assert_eq!(active_section(SECTIONS, 5000.0), Some("contact"));
    }

    #[test]
    fn no_active_section_above_the_first() {
        assert_eq!(active_section(&[("intro", 400.0)], 0.0), None);
        assert_eq!(active_section(&[], 100.0), None);
    }
}
