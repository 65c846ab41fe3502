mod contact;
mod header;
mod hero;
mod projects;
mod skills;

pub use contact::SendContactMessage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::profile::PROFILE;
use contact::ContactSection;
use header::Header;
use hero::HeroSection;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="apple-touch-icon" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-gray-300 antialiased scroll-smooth font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.description />
        <Meta name="keywords" content=PROFILE.keywords_meta() />
        <Meta property="og:title" content=PROFILE.og_title />
        <Meta property="og:description" content=PROFILE.og_description />
        <Meta property="og:type" content="website" />

        <Router>
            <Header />
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text=PROFILE.site_title />
        <main>
            <HeroSection />
            <SkillsSection />
            <ProjectsSection />
            <ContactSection />
        </main>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let built = chrono::DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.format("%b %e %Y").to_string())
        .unwrap_or_default();
    let year = env!("BUILD_TIME").get(..4).unwrap_or_default();
    view! {
        <footer class="border-t border-neutral-900 py-6 text-center text-xs text-neutral-600">
            <p>{format!("© {year} {}", PROFILE.name)}</p>
            <p class="mt-1">"Last built " {built}</p>
        </footer>
    }
}
