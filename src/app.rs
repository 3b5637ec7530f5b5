mod about;
mod contact;
mod experience;
mod footer;
mod glass;
mod glitch_text;
mod header;
mod homepage;
mod hover;
mod icons;
mod projects;
mod resume;
mod scene;
mod scroll;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::nav::{page_meta, SITE_TITLE};

use about::AboutPage;
use contact::ContactPage;
use experience::ExperiencePage;
use footer::Footer;
use header::{HamburgerMenu, Navbar};
use homepage::HomePage;
use projects::{ProjectPage, ProjectsHome, ProjectsWrapper};
use resume::ResumePage;
use theme::ThemeProvider;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        // dark until the stored preference is known on the client
        <html lang="en" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark light" />
                <link rel="shortcut icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans antialiased">
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
        <Title formatter=|title| format!("{title} | {SITE_TITLE}") />

        <Router>
            <ThemeProvider>
                <div class="flex min-h-screen flex-col">
                    <Navbar />
                    <HamburgerMenu />
                    <main class="flex w-full flex-grow flex-col">
                        <Routes fallback=|| view! { <NotFound /> }>
                            <Route path=path!("/") view=HomePage />
                            <Route path=path!("/about-me") view=AboutPage />
                            <Route path=path!("/experience") view=ExperiencePage />
                            <ParentRoute path=path!("/projects") view=ProjectsWrapper>
                                <Route path=path!("") view=ProjectsHome />
                                <Route path=path!(":slug") view=ProjectPage />
                            </ParentRoute>
                            <Route path=path!("/resume") view=ResumePage />
                            <Route path=path!("/contact") view=ContactPage />
                        </Routes>
                    </main>
                    <Footer />
                </div>
            </ThemeProvider>
        </Router>
    }
}

/// Title and description for the page at `path`.
#[component]
pub fn PageMetadata(#[prop(into)] path: String) -> impl IntoView {
    let meta = page_meta(&path);
    view! {
        <Title text=meta.title />
        <Meta name="description" content=meta.description />
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }
    view! {
        <PageMetadata path="/404" />
        <div class="mx-auto flex max-w-xl flex-grow flex-col items-center justify-center gap-6 px-6 py-24 text-center">
            <h1 class="text-6xl font-bold text-lush-500">"404"</h1>
            <p class="text-lg text-muted">"This page drifted out to sea."</p>
            <A href="/" attr:class="rounded-full border border-lush-500/40 px-6 py-2 hover:bg-lush-500/10 transition-colors">
                "Back home"
            </A>
        </div>
    }
}
