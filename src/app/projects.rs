use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::{Project, ProjectStatus, PORTFOLIO},
    reveal::{stagger, GRID_THRESHOLD},
    section::SectionId,
};

use super::reveal::{Reveal, SectionWrapper};

fn card(project: &Project, index: usize) -> impl IntoView {
    let delay = stagger(Duration::ZERO, Duration::from_millis(100), index);
    let badge = (project.status == ProjectStatus::Ongoing).then(|| {
        view! {
            <span class="absolute top-4 right-4 px-3 py-1 rounded-full text-xs font-medium bg-amber-500/15 text-amber-600 dark:text-amber-400 border border-amber-500/30">
                "Ongoing"
            </span>
        }
    });
    let tools = project
        .tools
        .iter()
        .map(|t| view! { <li class="px-2.5 py-1 rounded-md text-xs bg-black/5 dark:bg-white/5">{t.clone()}</li> })
        .collect_view();
    let links = project
        .links
        .labelled()
        .map(|(label, url)| {
            view! {
                <a
                    href=url.to_string()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-sm font-medium text-purple-500 hover:underline"
                >
                    {label}
                    " ↗"
                </a>
            }
        })
        .collect_view();

    view! {
        <Reveal
            threshold=GRID_THRESHOLD
            delay=delay
            class="group relative rounded-3xl border border-black/10 dark:border-white/10 overflow-hidden flex flex-col"
        >
            <div class=format!(
                "relative h-44 flex items-center justify-center text-6xl bg-gradient-to-br {}",
                project.accent,
            )>
                <span class="transition-transform duration-500 group-hover:scale-110">
                    {project.icon.clone()}
                </span>
                {badge}
            </div>
            <div class="flex flex-col flex-1 p-6">
                <div class="flex items-baseline justify-between gap-4">
                    <h3 class="text-xl font-semibold">{project.title.clone()}</h3>
                    <span class="text-xs font-mono text-black/40 dark:text-white/40">
                        {project.year.clone()}
                    </span>
                </div>
                <p class="mt-3 flex-1 text-sm leading-relaxed text-black/60 dark:text-white/60">
                    {project.description.clone()}
                </p>
                <ul class="mt-4 flex flex-wrap gap-2">{tools}</ul>
                <div class="mt-5 flex gap-5">{links}</div>
            </div>
        </Reveal>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PORTFOLIO
        .projects
        .iter()
        .enumerate()
        .map(|(i, p)| card(p, i))
        .collect_view();

    view! {
        <SectionWrapper id=SectionId::Projects>
            <p class="section-eyebrow">"— Selected Work"</p>
            <h2 class="section-title">
                "Featured " <span class="text-gradient">"Projects"</span>
            </h2>
            <div class="mt-12 grid md:grid-cols-2 gap-6">{cards}</div>
        </SectionWrapper>
    }
}
