use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::PORTFOLIO,
    reveal::{stagger, CONTENT_THRESHOLD},
    section::SectionId,
};

use super::reveal::{Reveal, SectionWrapper};

#[component]
pub fn About() -> impl IntoView {
    let profile = &PORTFOLIO.profile;

    let bio = profile
        .bio
        .iter()
        .enumerate()
        .map(|(i, para)| {
            let lead = (i == 0).then(|| {
                view! {
                    "Hey, I'm "
                    <span class="font-semibold text-purple-500">{profile.name.clone()}</span>
                    ". "
                }
            });
            view! {
                <p class="text-lg leading-relaxed text-black/70 dark:text-white/70">
                    {lead}
                    {para.clone()}
                </p>
            }
        })
        .collect_view();

    let timeline = PORTFOLIO
        .timeline
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let delay = stagger(Duration::from_millis(200), Duration::from_millis(150), i);
            view! {
                <Reveal threshold=CONTENT_THRESHOLD delay=delay class="relative pl-8 pb-8 last:pb-0">
                    <span class="absolute left-0 top-1.5 w-3 h-3 rounded-full bg-purple-500 ring-4 ring-purple-500/20"></span>
                    <span class="absolute left-[5px] top-5 bottom-0 w-px bg-black/10 dark:bg-white/10"></span>
                    <p class="text-xs font-mono text-purple-500">{item.year.clone()}</p>
                    <h4 class="mt-1 font-semibold">
                        {item.degree.clone()}
                        <span class="ml-2 text-sm font-normal text-black/50 dark:text-white/50">
                            {format!("({})", item.short)}
                        </span>
                    </h4>
                    <p class="text-sm text-black/60 dark:text-white/60">
                        {format!("{} · {}", item.institution, item.location)}
                    </p>
                </Reveal>
            }
        })
        .collect_view();

    let stats = profile
        .stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            let delay = stagger(Duration::from_millis(300), Duration::from_millis(100), i);
            view! {
                <Reveal
                    threshold=CONTENT_THRESHOLD
                    delay=delay
                    class="rounded-2xl border border-black/10 dark:border-white/10 p-5 text-center"
                >
                    <p class="text-3xl font-bold text-gradient">{stat.value.clone()}</p>
                    <p class="mt-1 font-medium">{stat.label.clone()}</p>
                    <p class="text-xs text-black/50 dark:text-white/50">{stat.sub.clone()}</p>
                </Reveal>
            }
        })
        .collect_view();

    view! {
        <SectionWrapper id=SectionId::About>
            <p class="section-eyebrow">"— About Me"</p>
            <h2 class="section-title">
                "Designing with Empathy, "
                <span class="text-gradient">"Building with Precision."</span>
            </h2>
            <div class="mt-12 grid lg:grid-cols-2 gap-12">
                <Reveal threshold=CONTENT_THRESHOLD class="space-y-5">
                    {bio}
                    <div class="grid grid-cols-3 gap-4 pt-4">{stats}</div>
                </Reveal>
                <div>
                    <h3 class="mb-6 text-sm uppercase tracking-widest text-black/50 dark:text-white/50">
                        "Education"
                    </h3>
                    {timeline}
                </div>
            </div>
        </SectionWrapper>
    }
}
