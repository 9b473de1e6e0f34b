use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};

mod config;
mod content;
mod seo;
mod theme;
mod typography;
mod blog {
    pub mod article;
    pub mod filter;
}
mod pages {
    pub mod about;
    pub mod blog;
    pub mod home;
}
mod contact {
    pub mod service;
    pub mod validation;
}
mod components {
    pub mod contact;
    pub mod error_boundary;
    pub mod footer;
    pub mod navbar;
    pub mod redirect;
    pub mod sections;
}
mod motion {
    pub mod driver;
    pub mod inertia;
}

use blog::article::BlogArticle;
use components::{
    error_boundary::ErrorBoundary,
    footer::{Footer, TrustAnchor},
    navbar::Navbar,
    redirect::ReplaceRoute,
    sections::SECTION_STYLES,
};
use pages::{about::About, blog::Blog, home::Home};
use theme::ThemeProvider;

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogArticle { slug: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <Blog /> }
        },
        Route::BlogArticle { slug } => {
            info!("Rendering article {}", slug);
            html! { <BlogArticle {slug} /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            return html! { <ReplaceRoute to={Route::Home} /> };
        },
    };
    html! { <ErrorBoundary>{page}</ErrorBoundary> }
}

/// Scrolls back to the top whenever the path changes. In-page anchors
/// (`/#contact`) keep the browser's own scrolling.
#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let location = use_location();
    let path = location.as_ref().map(|l| l.path().to_string());
    let has_hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map_or(false, |hash| !hash.is_empty());

    use_effect_with_deps(
        move |_| {
            if !has_hash {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        path,
    );
    html! {}
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            if let Err(e) = seo::inject_site_schema() {
                warn!("Could not inject site schema: {}", e);
            }
            || ()
        },
        (),
    );

    html! {
        <ThemeProvider>
            <BrowserRouter>
                <ScrollToTop />
                <div class="site">
                    <Navbar />
                    <Switch<Route> render={switch} />
                    <TrustAnchor />
                    <Footer />
                </div>
                <style>
                    {GLOBAL_STYLES}
                    {SECTION_STYLES}
                </style>
            </BrowserRouter>
        </ThemeProvider>
    }
}

const GLOBAL_STYLES: &str = r#"
:root {
    --bg: #fafafa;
    --surface: #f4f4f5;
    --text: #18181b;
    --text-soft: #3f3f46;
    --muted: #71717a;
    --border: rgba(24, 24, 27, 0.08);
    --border-strong: rgba(24, 24, 27, 0.2);
    --gold: #b08d4a;
    --grid-line: rgba(24, 24, 27, 0.03);
    --nav-scrolled: rgba(255, 255, 255, 0.8);
    --serif: 'Playfair Display', Georgia, serif;
    --sans: 'Inter', system-ui, sans-serif;
}
html.dark {
    --bg: #0c0c0e;
    --surface: #141417;
    --text: #ffffff;
    --text-soft: #d4d4d8;
    --muted: #a1a1aa;
    --border: rgba(255, 255, 255, 0.06);
    --border-strong: rgba(255, 255, 255, 0.2);
    --gold: #c5a059;
    --grid-line: rgba(255, 255, 255, 0.02);
    --nav-scrolled: rgba(12, 12, 14, 0.8);
}
html { scroll-behavior: smooth; }
body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--sans);
    transition: background 0.5s ease, color 0.5s ease;
}
.eyebrow {
    display: block;
    margin-bottom: 1.5rem;
    color: var(--gold);
    font-size: 10px;
    font-weight: 600;
    letter-spacing: 0.3em;
    text-transform: uppercase;
}
.text-link {
    color: var(--text);
    font-size: 10px;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    text-decoration: none;
}
.text-link:hover { color: var(--gold); }
.btn-outline,
.btn-muted {
    display: inline-block;
    padding: 0.75rem 2rem;
    border: 1px solid var(--border-strong);
    background: transparent;
    color: var(--text);
    font-size: 11px;
    letter-spacing: 0.15em;
    text-transform: uppercase;
    text-decoration: none;
    cursor: pointer;
    transition: all 0.5s ease;
}
.btn-outline:hover { border-color: var(--text); }
.btn-muted { color: var(--muted); }
.theme-toggle {
    position: relative;
    width: 2rem;
    height: 2rem;
    background: none;
    border: none;
    color: var(--text);
    cursor: pointer;
}
.theme-icon {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0;
    transform: rotate(-90deg) scale(0.6);
    transition: all 0.4s ease;
}
.theme-icon.visible {
    opacity: 1;
    transform: none;
}
.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    padding: 0;
    margin: -1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    border: 0;
}
"#;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/blog/a/b"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
    }
}
