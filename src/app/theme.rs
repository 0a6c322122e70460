use leptos::prelude::*;

use crate::theme::{Theme, ThemeStore};

/// Shared theme store plus a signal mirror for the view.
#[derive(Clone)]
pub struct ThemeContext {
    store: ThemeStore,
    is_dark: RwSignal<bool>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> Signal<bool> {
        self.is_dark.into()
    }

    pub fn toggle(&self) {
        self.store.toggle();
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(feature = "hydrate")]
fn create_store() -> ThemeStore {
    ThemeStore::new(crate::theme::LocalStoragePersistence)
}

#[cfg(not(feature = "hydrate"))]
fn create_store() -> ThemeStore {
    ThemeStore::in_memory(Theme::default())
}

/// Mirrors the theme onto `<html class="dark">`.
fn apply_root_class(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = document().document_element() else {
            return;
        };
        if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark()) {
            log::warn!("couldn't update root theme class: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let store = create_store();
    // server markup is always dark; the saved preference lands after hydration
    let is_dark = RwSignal::new(Theme::default().is_dark());

    let subscription = store.subscribe(move |theme| {
        is_dark.set(theme.is_dark());
        apply_root_class(theme);
    });
    {
        let store = store.clone();
        on_cleanup(move || store.unsubscribe(subscription));
    }

    {
        let store = store.clone();
        Effect::new(move |_| {
            let theme = store.theme();
            is_dark.set(theme.is_dark());
            apply_root_class(theme);
        });
    }

    provide_context(ThemeContext { store, is_dark });
    children()
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let is_dark = theme.is_dark();
    let label = move || {
        if is_dark.get() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            type="button"
            class="relative w-10 h-10 rounded-full flex items-center justify-center border border-black/10 dark:border-white/10 hover:bg-black/5 dark:hover:bg-white/5 transition-colors"
            aria-label=label
            title=label
            on:click=move |_| theme.toggle()
        >
            <span class=move || {
                if is_dark.get() {
                    "transition-transform duration-300 rotate-0"
                } else {
                    "transition-transform duration-300 rotate-180"
                }
            }>{move || if is_dark.get() { "☀" } else { "☾" }}</span>
        </button>
    }
}
