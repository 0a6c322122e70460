use std::time::Duration;

use leptos::prelude::*;

use crate::{
    content::{Skill, SkillCategory, PORTFOLIO},
    reveal::{stagger, stagger_css, GRID_THRESHOLD},
    section::SectionId,
};

use super::reveal::{Reveal, SectionWrapper};

const CHIP_STEP: Duration = Duration::from_millis(50);

fn chip(skill: &Skill, index: usize) -> impl IntoView {
    let icon = skill.icon.clone().map(|class| {
        view! { <i class=class style:color=skill.color.clone()></i> }
    });
    let dot = skill.icon.is_none().then(|| {
        view! { <span class="w-2 h-2 rounded-full" style:background-color=skill.color.clone()></span> }
    });
    view! {
        <li
            class="skill-chip"
            data-cursor-hover=""
            style:transition-delay=stagger_css(Duration::ZERO, CHIP_STEP, index)
        >
            {icon}
            {dot}
            <span>{skill.name.clone()}</span>
        </li>
    }
}

fn panel(category: &SkillCategory, index: usize) -> impl IntoView {
    let delay = stagger(Duration::from_millis(100), Duration::from_millis(100), index);
    let chips = category
        .skills
        .iter()
        .enumerate()
        .map(|(i, s)| chip(s, i))
        .collect_view();
    view! {
        <Reveal
            threshold=GRID_THRESHOLD
            delay=delay
            class="rounded-3xl border border-black/10 dark:border-white/10 p-8"
        >
            <p class="text-xs uppercase tracking-widest text-purple-500">{category.label.clone()}</p>
            <h3 class="mt-2 text-2xl font-semibold">{category.title.clone()}</h3>
            <ul class="mt-6 flex flex-wrap gap-3">{chips}</ul>
        </Reveal>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let panels = PORTFOLIO
        .skills
        .iter()
        .enumerate()
        .map(|(i, c)| panel(c, i))
        .collect_view();

    view! {
        <SectionWrapper id=SectionId::Skills>
            <p class="section-eyebrow">"— Skills & Tools"</p>
            <h2 class="section-title">
                "What I " <span class="text-gradient">"Work With"</span>
            </h2>
            <div class="mt-12 grid md:grid-cols-2 gap-6">{panels}</div>
            <p class="mt-10 text-center text-sm text-black/50 dark:text-white/50">
                "Always learning · Currently exploring Rust & WebAssembly"
            </p>
        </SectionWrapper>
    }
}
