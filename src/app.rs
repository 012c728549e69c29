mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod projects;
mod scroll_to_top;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::portfolio;

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use projects::Projects;
use scroll_to_top::ScrollToTop;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-dark-900 text-dark-50 scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = portfolio().profile.name.clone();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Router>
            <main class="flex flex-col w-full overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The single page: every section in anchor order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Skills />
        <Experience />
        <Projects />
        <Contact />
        <Footer />
        <ScrollToTop />
    }
}
