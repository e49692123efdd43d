mod about;
mod contact;
#[cfg(feature = "hydrate")]
mod dom;
mod hero;
mod homepage;
mod nav;
mod observers;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{
    config::SITE,
    content::{FAVICON_FILE, SITE_OWNER},
};
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // served next to the wasm bundle, same as the hydration scripts
    let stylesheet = format!("/{}/{}.css", options.site_pkg_dir, options.output_name);

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta
                    name="description"
                    content="Graphics programmer and full-stack developer: ray tracers, multiplayer servers and web apps."
                />
                <link rel="shortcut icon" type="image/ico" href=SITE.asset_url(FAVICON_FILE) />
                <link rel="stylesheet" id="leptos" href=stylesheet />
                <MetaTags />
            </head>
            <body>
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
        <Title text=SITE_OWNER />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
