use leptos::prelude::*;

use crate::{content::PORTFOLIO, section::SectionId};

use super::{
    button::{Button, ButtonVariant},
    scroll::scroll_to_section,
};

/// Cycles through the profile roles, one character at a time.
#[component]
fn RoleTypewriter() -> impl IntoView {
    let (text, set_text) = signal(String::new());

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use crate::{
            scheduler::BrowserScheduler,
            typewriter::{Typewriter, TypewriterDriver, TypewriterTiming},
        };

        let machine = Typewriter::new(PORTFOLIO.profile.roles.clone(), TypewriterTiming::default());
        let driver = TypewriterDriver::start(machine, Rc::new(BrowserScheduler::default()), move |s| {
            set_text.set(s.to_string())
        });
        // dropped with the owner, which cancels the pending tick
        let _ = StoredValue::new_local(driver);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_text;

    view! {
        <span class="text-gradient">{move || text.get()}</span>
        <span class="inline-block w-[2px] h-[1em] ml-1 align-middle bg-purple-500 animate-pulse"></span>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    let socials = profile
        .socials
        .iter()
        .map(|s| {
            view! {
                <a
                    href=s.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=s.name.clone()
                    class="w-10 h-10 rounded-full border border-black/10 dark:border-white/10 flex items-center justify-center text-lg hover:text-purple-500 hover:border-purple-500/50 transition-colors"
                >
                    <i class=s.icon.clone()></i>
                </a>
            }
        })
        .collect_view();

    view! {
        <section
            id=SectionId::Hero.id()
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 -z-10 bg-[radial-gradient(ellipse_at_top,rgba(168,85,247,0.15),transparent_60%)]"></div>
            <div class="max-w-5xl mx-auto px-6 text-center hero-enter">
                {profile
                    .available
                    .then(|| {
                        view! {
                            <div class="inline-flex items-center gap-2 px-4 py-1.5 mb-8 rounded-full border border-green-500/30 bg-green-500/10 text-sm text-green-600 dark:text-green-400">
                                <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                                "Available for freelance & collaboration"
                            </div>
                        }
                    })}
                <h1 class="text-5xl md:text-7xl font-bold tracking-tight leading-tight">
                    "Designing " <span class="text-gradient">"Experiences"</span>
                </h1>
                <p class="mt-4 text-2xl md:text-3xl text-black/70 dark:text-white/70">
                    "crafting intuitive digital products."
                </p>
                <p class="mt-6 text-xl md:text-2xl font-medium h-8">
                    <RoleTypewriter />
                </p>
                <p class="mt-6 max-w-2xl mx-auto text-black/60 dark:text-white/60 leading-relaxed">
                    {profile.intro.clone()}
                </p>
                <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <Button on_click=Callback::new(|_| scroll_to_section(SectionId::Projects))>
                        "View Projects"
                    </Button>
                    <Button
                        variant=ButtonVariant::Secondary
                        href=profile.resume_url.clone()
                        download=true
                    >
                        "Download Resume"
                    </Button>
                </div>
                <div class="mt-10 flex items-center justify-center gap-3">{socials}</div>
            </div>
            <button
                type="button"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 text-xs uppercase tracking-widest text-black/40 dark:text-white/40"
                on:click=|_| scroll_to_section(SectionId::About)
            >
                "Scroll"
                <span class="w-px h-10 bg-current animate-bounce"></span>
            </button>
        </section>
    }
}
