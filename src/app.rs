mod about;
mod button;
mod contact;
mod cursor;
mod footer;
mod hero;
mod navbar;
mod projects;
mod reveal;
mod scroll;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PORTFOLIO;

use about::About;
use contact::Contact;
use cursor::CustomCursor;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let profile = &PORTFOLIO.profile;
    let description = format!("{} · {}", profile.headline, profile.location);

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Meta name="description" content=description />
        <ThemeProvider>
            <Router>
                <CustomCursor />
                <Navbar />
                <main class="flex flex-col w-full">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=Home />
                    </Routes>
                </main>
                <Footer />
            </Router>
        </ThemeProvider>
    }
}

#[component]
fn Home() -> impl IntoView {
    view! {
        <Title text=PORTFOLIO.profile.name.clone() />
        <Hero />
        <About />
        <Skills />
        <Projects />
        <Contact />
    }
}
