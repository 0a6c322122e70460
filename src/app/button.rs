use leptos::{either::Either, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
        }
    }
}

/// Styled link when `href` is set, plain button otherwise.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] download: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = format!("{} {class}", variant.class());
    match href {
        Some(href) => Either::Left(view! {
            <a href=href class=class download=download.then_some("")>
                {children()}
            </a>
        }),
        None => Either::Right(view! {
            <button
                type="button"
                class=class
                on:click=move |_| {
                    if let Some(cb) = on_click {
                        cb.run(());
                    }
                }
            >
                {children()}
            </button>
        }),
    }
}
