use std::time::Duration;

use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::{
    reveal::{RevealTracker, WRAPPER_THRESHOLD},
    section::SectionId,
};

/// True once at least `threshold` of the element has been on screen.
pub fn use_reveal(target: NodeRef<html::Div>, threshold: f64) -> Signal<bool> {
    let seen = RwSignal::new(false);
    let mut tracker = RevealTracker::new(threshold);
    let thresholds = vec![tracker.threshold()];
    use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            for entry in entries {
                if tracker.observe(entry.intersection_ratio()) {
                    seen.set(true);
                }
            }
        },
        UseIntersectionObserverOptions::default().thresholds(thresholds),
    );
    seen.into()
}

fn reveal_class(seen: bool, extra: &str) -> String {
    if seen {
        format!("reveal reveal-visible {extra}")
    } else {
        format!("reveal {extra}")
    }
}

/// Fades its children in the first time they scroll into view.
#[component]
pub fn Reveal(
    threshold: f64,
    #[prop(optional)] delay: Duration,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let seen = use_reveal(node_ref, threshold);
    let delay = format!("{}ms", delay.as_millis());

    view! {
        <div
            node_ref=node_ref
            class=move || reveal_class(seen.get(), &class)
            style:transition-delay=delay
        >
            {children()}
        </div>
    }
}

#[component]
pub fn SectionWrapper(
    id: SectionId,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let seen = use_reveal(node_ref, WRAPPER_THRESHOLD);

    view! {
        <section id=id.id() class=format!("section-padding relative {class}")>
            <div
                node_ref=node_ref
                class=move || reveal_class(seen.get(), "max-w-6xl mx-auto px-6")
            >
                {children()}
            </div>
        </section>
    }
}
