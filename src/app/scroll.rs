use crate::section::SectionId;

/// Smooth-scrolls to a section. Does nothing if the section isn't rendered.
pub fn scroll_to_section(section: SectionId) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::document;
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        let Some(el) = document().get_element_by_id(section.id()) else {
            log::debug!("no #{section} to scroll to");
            return;
        };
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::window;
        use web_sys::{ScrollBehavior, ScrollToOptions};

        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}
