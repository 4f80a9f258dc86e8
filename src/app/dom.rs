use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::sections::{Extent, SectionNavigator, Viewport};

/// [`Viewport`] over the live browser window. Only call from event handlers or
/// effects; there is no window during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

impl Viewport for DomViewport {
    fn scroll_y(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn extent(&self, id: &str) -> Option<Extent> {
        let el = document()
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(Extent::new(
            el.offset_top() as f64,
            el.offset_height() as f64,
        ))
    }

    fn scroll_into_view(&self, id: &str) -> bool {
        let el = if let Some(el) = document().get_element_by_id(id) {
            el
        } else {
            return false;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        true
    }

    fn scroll_to_top(&self) {
        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

pub fn navigator() -> SectionNavigator<DomViewport> {
    SectionNavigator::new(DomViewport)
}
