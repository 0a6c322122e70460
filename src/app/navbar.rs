use leptos::prelude::*;

use crate::{content::PORTFOLIO, section::SectionId};

use super::{
    scroll::{scroll_to_section, scroll_to_top},
    theme::ThemeToggle,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let (scrolled, set_scrolled) = signal(false);
    let (active, set_active) = signal(None::<SectionId>);
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        use std::{cell::RefCell, rc::Rc};

        use leptos::ev;

        use crate::active_section::{is_scrolled, ActiveSectionTracker, ACTIVE_OFFSET};

        let tracker = RefCell::new(ActiveSectionTracker::with_sections(
            ACTIVE_OFFSET,
            SectionId::NAV.map(SectionId::id),
        ));
        let update = Rc::new(move || {
            set_scrolled.set(is_scrolled(window().scroll_y().unwrap_or(0.0)));
            let mut tracker = tracker.borrow_mut();
            let current = tracker.recompute(|id| {
                document()
                    .get_element_by_id(id)
                    .map(|el| el.get_bounding_client_rect().top())
            });
            set_active.set(current.and_then(SectionId::from_id));
        });

        let on_scroll = Rc::clone(&update);
        let handle = window_event_listener(ev::scroll, move |_| on_scroll());
        on_cleanup(move || handle.remove());
        // page may load already scrolled
        request_animation_frame(move || update());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (set_scrolled, set_active);

    let go = move |section: SectionId| {
        set_menu_open.set(false);
        scroll_to_section(section);
    };

    let profile = &PORTFOLIO.profile;
    let links = SectionId::NAV
        .into_iter()
        .map(|section| {
            view! {
                <li>
                    <a
                        href=section.href()
                        class=move || {
                            if active.get() == Some(section) {
                                "nav-link nav-link-active"
                            } else {
                                "nav-link"
                            }
                        }
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(section);
                        }
                    >
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 py-3 backdrop-blur-md bg-white/80 dark:bg-black/70 border-b border-black/5 dark:border-white/5"
            } else {
                "fixed top-0 inset-x-0 z-40 transition-all duration-300 py-6 bg-transparent"
            }
        }>
            <nav class="max-w-6xl mx-auto px-6 flex items-center justify-between">
                <a
                    href="#"
                    class="flex items-center gap-2 font-bold text-lg"
                    on:click=move |ev| {
                        ev.prevent_default();
                        set_menu_open.set(false);
                        scroll_to_top();
                    }
                >
                    <span class="w-9 h-9 rounded-lg bg-gradient-to-br from-purple-500 to-indigo-500 text-white flex items-center justify-center text-sm">
                        {profile.initials.clone()}
                    </span>
                    <span class="hidden sm:inline">
                        <span class="text-purple-500">"·"</span>
                        " "
                        {profile.short_name.clone()}
                    </span>
                </a>
                <ul class="hidden md:flex items-center gap-8 text-sm">{links}</ul>
                <div class="flex items-center gap-3">
                    <ThemeToggle />
                    <a
                        href=SectionId::Contact.href()
                        class="hidden md:inline-flex btn-primary text-sm"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(SectionId::Contact);
                        }
                    >
                        "Let's Talk"
                    </a>
                    <button
                        type="button"
                        class="md:hidden w-10 h-10 flex items-center justify-center text-xl"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div class="md:hidden fixed inset-0 top-16 z-30 bg-white dark:bg-black px-6 py-10">
                    <ul class="flex flex-col gap-6">{mobile_links(go)}</ul>
                </div>
            </Show>
        </header>
    }
}

fn mobile_links(go: impl Fn(SectionId) + Copy + Send + Sync + 'static) -> impl IntoView {
    SectionId::NAV
        .into_iter()
        .enumerate()
        .map(|(i, section)| {
            view! {
                <li>
                    <a
                        href=section.href()
                        class="flex items-baseline gap-4 text-3xl font-semibold"
                        on:click=move |ev| {
                            ev.prevent_default();
                            go(section);
                        }
                    >
                        <span class="text-sm text-purple-500 font-mono">{format!("0{}.", i + 1)}</span>
                        {section.label()}
                    </a>
                </li>
            }
        })
        .collect_view()
}
