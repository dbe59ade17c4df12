mod contact;
mod footer;
mod header;
mod homepage;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use contact::ContactSection;
use footer::Footer;
use header::Header;
use homepage::HomePage;

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
            <body class="bg-[#0f0f0f] text-white scroll-smooth">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let config = SiteConfig::default();
    let owner = config.owner_name.clone();
    provide_context(config);

    view! {
        <Title formatter=move |title| format!("{owner} - {title}") />
        <Meta name="description" content="Portfolio, services and contact details." />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Page />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn Page() -> impl IntoView {
    view! {
        <HomePage />
        <ContactSection />
    }
}

/// Reads the site configuration, falling back to defaults outside of [`App`].
pub(crate) fn site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}
