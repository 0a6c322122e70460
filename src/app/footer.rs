use leptos::prelude::*;

use crate::{
    content::{build_year, PORTFOLIO},
    section::SectionId,
};

use super::scroll::scroll_to_section;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    let links = SectionId::NAV
        .into_iter()
        .map(|section| {
            view! {
                <a
                    href=section.href()
                    class="hover:text-purple-500 transition-colors"
                    on:click=move |ev| {
                        ev.prevent_default();
                        scroll_to_section(section);
                    }
                >
                    {section.label()}
                </a>
            }
        })
        .collect_view();
    let socials = ["GitHub", "LinkedIn"]
        .into_iter()
        .filter_map(|name| profile.social(name))
        .map(|s| {
            view! {
                <a
                    href=s.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=s.name.clone()
                    class="text-lg hover:text-purple-500 transition-colors"
                >
                    <i class=s.icon.clone()></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="border-t border-black/10 dark:border-white/10">
            <div class="max-w-6xl mx-auto px-6 py-12 flex flex-col md:flex-row gap-8 md:items-center md:justify-between">
                <div>
                    <p class="font-semibold">{profile.name.clone()}</p>
                    <p class="text-sm text-black/50 dark:text-white/50">
                        {format!("{} · {}", profile.headline, profile.location)}
                    </p>
                </div>
                <nav class="flex flex-wrap gap-6 text-sm">{links}</nav>
                <div class="flex gap-4">{socials}</div>
            </div>
            <div class="max-w-6xl mx-auto px-6 pb-8 flex flex-col sm:flex-row justify-between gap-2 text-xs text-black/40 dark:text-white/40">
                <p>{format!("© {} {}. All rights reserved.", build_year(), profile.name)}</p>
                <p>"Built with Rust & Leptos"</p>
            </div>
        </footer>
    }
}
