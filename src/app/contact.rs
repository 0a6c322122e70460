use leptos::{either::Either, ev, prelude::*};

use crate::{
    contact::{ContactController, ContactError, ContactState, Field},
    content::PORTFOLIO,
    reveal::GRID_THRESHOLD,
    section::SectionId,
};

use super::reveal::{Reveal, SectionWrapper};

type Controller = StoredValue<Option<ContactController>, LocalStorage>;

fn with_controller(controller: Controller, f: impl FnOnce(&ContactController)) {
    controller.with_value(|c| {
        if let Some(c) = c {
            f(c);
        }
    });
}

fn field_class(focused: bool) -> &'static str {
    if focused {
        "form-field form-field-focused"
    } else {
        "form-field"
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    state: RwSignal<ContactState>,
    controller: Controller,
) -> impl IntoView {
    let value = move || state.with(|s| s.form.get(field).to_string());
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        with_controller(controller, |c| c.set_field(field, value));
    };
    let on_focus = move |_| with_controller(controller, |c| c.set_focus(Some(field)));
    let on_blur = move |_| with_controller(controller, |c| c.set_focus(None));
    let focused = move || field_class(state.with(|s| s.focused == Some(field)));

    let input = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=field.as_str()
                name=field.as_str()
                rows="5"
                required
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
                class="w-full bg-transparent outline-none resize-none"
            ></textarea>
        }),
        _ => Either::Right(view! {
            <input
                id=field.as_str()
                name=field.as_str()
                type=if field == Field::Email { "email" } else { "text" }
                required
                placeholder=placeholder
                prop:value=value
                on:input=on_input
                on:focus=on_focus
                on:blur=on_blur
                class="w-full bg-transparent outline-none"
            />
        }),
    };

    view! {
        <div class=focused>
            <label for=field.as_str() class="block mb-2 text-xs uppercase tracking-widest text-black/50 dark:text-white/50">
                {label}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let profile = &PORTFOLIO.profile;
    let state = RwSignal::new(ContactState::default());
    let (error, set_error) = signal(None::<String>);
    let controller: Controller = StoredValue::new_local(None);

    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;

        use crate::{contact::ContactTiming, scheduler::BrowserScheduler};

        controller.set_value(Some(ContactController::new(
            Rc::new(BrowserScheduler::default()),
            ContactTiming::default(),
            move |s| state.set(s.clone()),
        )));
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mut result = Ok(());
        with_controller(controller, |c| result = c.submit());
        match result {
            Ok(()) => set_error.set(None),
            // the button is disabled while busy, a stray submit changes nothing
            Err(ContactError::Busy) => {}
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let socials = ["GitHub", "LinkedIn", "Behance"]
        .into_iter()
        .filter_map(|name| profile.social(name))
        .map(|s| {
            view! {
                <a
                    href=s.url.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 px-4 py-2 rounded-full border border-black/10 dark:border-white/10 text-sm hover:border-purple-500/50 hover:text-purple-500 transition-colors"
                >
                    <i class=s.icon.clone()></i>
                    {s.name.clone()}
                </a>
            }
        })
        .collect_view();

    let info = [
        ("Email", profile.email.clone(), profile.mailto()),
        ("Phone", profile.phone.clone(), profile.tel()),
        ("Location", profile.location.clone(), profile.maps_url.clone()),
    ]
    .into_iter()
    .map(|(label, text, href)| {
        view! {
            <a
                href=href
                target=(label == "Location").then_some("_blank")
                class="flex flex-col rounded-2xl border border-black/10 dark:border-white/10 px-5 py-4 hover:border-purple-500/50 transition-colors"
            >
                <span class="text-xs uppercase tracking-widest text-black/50 dark:text-white/50">{label}</span>
                <span class="mt-1 font-medium">{text}</span>
            </a>
        }
    })
    .collect_view();

    let availability = profile.available.then(|| {
        view! {
            <div class="rounded-2xl border border-green-500/30 bg-green-500/5 p-5">
                <p class="flex items-center gap-2 font-semibold text-green-600 dark:text-green-400">
                    <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                    "Available for work"
                </p>
                <p class="mt-2 text-sm text-black/60 dark:text-white/60">
                    {profile.availability.clone()}
                </p>
            </div>
        }
    });

    let sending = move || state.with(ContactState::is_sending);
    let sent = move || state.with(ContactState::is_sent);

    view! {
        <SectionWrapper id=SectionId::Contact>
            <p class="section-eyebrow">"— Get In Touch"</p>
            <h2 class="section-title">
                "Let's Work " <span class="text-gradient">"Together"</span>
            </h2>
            <p class="mt-4 max-w-2xl text-black/60 dark:text-white/60">
                "Have a project in mind? I'd love to hear about it. Send me a message and let's create something amazing."
            </p>
            <div class="mt-12 grid lg:grid-cols-5 gap-10">
                <Reveal threshold=GRID_THRESHOLD class="lg:col-span-2 space-y-4">
                    {info}
                    {availability}
                    <p class="pt-2 text-xs uppercase tracking-widest text-black/50 dark:text-white/50">
                        "Find me on"
                    </p>
                    <div class="flex flex-wrap gap-3">{socials}</div>
                </Reveal>
                <Reveal threshold=GRID_THRESHOLD class="lg:col-span-3">
                    <form class="space-y-5" on:submit=on_submit>
                        <div class="grid sm:grid-cols-2 gap-5">
                            <FormField
                                field=Field::Name
                                label="Full Name"
                                placeholder="Prajal Gurung"
                                state
                                controller
                            />
                            <FormField
                                field=Field::Email
                                label="Email Address"
                                placeholder="you@example.com"
                                state
                                controller
                            />
                        </div>
                        <FormField
                            field=Field::Message
                            label="Message"
                            placeholder="Tell me about your project..."
                            state
                            controller
                        />
                        {move || {
                            error.get().map(|e| view! { <p class="text-sm text-red-500">{e}</p> })
                        }}
                        <button type="submit" class="btn-primary w-full" disabled=move || sending() || sent()>
                            {move || if sending() { "Sending..." } else { "Send Message" }}
                        </button>
                        <Show when=sent>
                            <p class="text-center text-sm text-green-600 dark:text-green-400">
                                "Thanks! Your message is on its way. I'll get back to you soon."
                            </p>
                        </Show>
                    </form>
                </Reveal>
            </div>
        </SectionWrapper>
    }
}
