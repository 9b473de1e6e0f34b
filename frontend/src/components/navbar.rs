use log::debug;
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::motion::driver::ScrollInertiaDriver;
use crate::motion::inertia::ScrollUpdate;
use crate::theme::ThemeToggle;
use crate::Route;

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub anchor: bool,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Capabilities", href: "/#expertise", anchor: true },
    NavItem { label: "The Firm", href: "/#about", anchor: true },
    NavItem { label: "Insights", href: "/blog", anchor: false },
    NavItem { label: "Contact", href: "/#contact", anchor: true },
];

pub fn logo_transform(rotation: f64) -> String {
    format!("rotateY({:.2}deg) translateY(0.08em)", rotation)
}

const LOCKED_PROPS: [&str; 4] = ["overflow", "position", "top", "width"];

/// Body styles held while the mobile menu is open. Remembers the scroll
/// offset it was taken at so releasing it puts the page back there.
#[derive(Debug, PartialEq)]
pub struct BodyLock {
    scroll_y: f64,
}

impl BodyLock {
    pub fn at(scroll_y: f64) -> Self {
        Self { scroll_y }
    }

    pub fn styles(&self) -> [(&'static str, String); 4] {
        [
            (LOCKED_PROPS[0], "hidden".to_string()),
            (LOCKED_PROPS[1], "fixed".to_string()),
            (LOCKED_PROPS[2], format!("-{}px", self.scroll_y)),
            (LOCKED_PROPS[3], "100%".to_string()),
        ]
    }

    pub fn restore_y(&self) -> f64 {
        self.scroll_y
    }

    fn take() -> Option<Self> {
        let window = window()?;
        let body = window.document()?.body()?;
        let lock = Self::at(window.scroll_y().unwrap_or(0.0));
        let style = body.style();
        for (prop, value) in lock.styles() {
            let _ = style.set_property(prop, &value);
        }
        debug!("Body scroll locked at {}", lock.scroll_y);
        Some(lock)
    }

    fn release(self) {
        let Some(window) = window() else { return };
        if let Some(body) = window.document().and_then(|d| d.body()) {
            let style = body.style();
            for prop in LOCKED_PROPS {
                let _ = style.remove_property(prop);
            }
        }
        window.scroll_to_with_x_and_y(0.0, self.restore_y());
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_scrolled = use_state_eq(|| false);
    let rotation = use_state_eq(|| 0.0f64);
    let menu_open = use_state_eq(|| false);
    let route = use_route::<Route>();
    let is_home = matches!(route, Some(Route::Home));

    {
        let is_scrolled = is_scrolled.clone();
        let rotation = rotation.clone();
        use_effect_with_deps(
            move |_| {
                let on_update = Callback::from(move |update: ScrollUpdate| {
                    is_scrolled.set(update.is_scrolled);
                    rotation.set(update.rotation);
                });
                let mut driver = ScrollInertiaDriver::new(on_update);
                driver.start();
                move || drop(driver)
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && *menu_open {
                debug!("Closing mobile menu on Escape");
                menu_open.set(false);
            }
        });
    }

    // Closing the menu (or unmounting with it open) tears down the effect
    // that took the lock, which is where the page gets its position back.
    use_effect_with_deps(
        |open| {
            let lock = if *open { BodyLock::take() } else { None };
            move || {
                if let Some(lock) = lock {
                    lock.release();
                }
            }
        },
        *menu_open,
    );

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let cta_href = if is_home { "#contact" } else { "/#contact" };

    let desktop_item = |item: &NavItem| -> Html {
        if item.anchor {
            html! { <a class="nav-link" href={item.href}>{item.label}</a> }
        } else {
            html! { <Link<Route> to={Route::Blog} classes="nav-link">{item.label}</Link<Route>> }
        }
    };
    let mobile_item = |item: &NavItem| -> Html {
        if item.anchor {
            html! { <a class="mobile-link" href={item.href} onclick={close_menu.clone()}>{item.label}</a> }
        } else {
            html! {
                <div onclick={close_menu.clone()}>
                    <Link<Route> to={Route::Blog} classes="mobile-link">{item.label}</Link<Route>>
                </div>
            }
        }
    };

    html! {
        <>
            <nav
                role="navigation"
                aria-label="Main Navigation"
                class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}
            >
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <span class="nav-logo-word" aria-label="Boru Consulting Home">
                            <span>{"B"}</span>
                            <img
                                src="/logo-o.png"
                                alt=""
                                class="nav-logo-glyph"
                                style={format!("transform: {}; transform-style: preserve-3d;", logo_transform(*rotation))}
                                aria-hidden="true"
                            />
                            <span>{"RU"}</span>
                        </span>
                    </Link<Route>>

                    <div class="nav-right">
                        { for NAV_ITEMS.iter().map(desktop_item) }
                        <div class="nav-actions">
                            <ThemeToggle />
                            <a class="nav-cta" href={cta_href}>{"Let's Talk"}</a>
                        </div>
                    </div>

                    <div class="nav-mobile-toggle">
                        <ThemeToggle />
                        <button
                            class="burger-menu"
                            onclick={toggle_menu}
                            aria-label={if *menu_open { "Close menu" } else { "Open menu" }}
                            aria-expanded={menu_open.to_string()}
                            aria-controls="mobile-menu"
                        >
                            if *menu_open {
                                <span class="burger-close">{"✕"}</span>
                            } else {
                                <span></span>
                                <span></span>
                                <span></span>
                            }
                        </button>
                    </div>
                </div>
            </nav>

            <div
                id="mobile-menu"
                class={classes!("mobile-menu", (*menu_open).then(|| "open"))}
                aria-hidden={(!*menu_open).to_string()}
            >
                { for NAV_ITEMS.iter().map(mobile_item) }
                <a class="mobile-cta" href={cta_href} onclick={close_menu.clone()}>{"Let's Talk"}</a>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 40;
                    padding: 2rem 0;
                    border-bottom: 1px solid transparent;
                    transition: all 0.7s ease;
                }
                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: var(--nav-scrolled);
                    backdrop-filter: blur(20px);
                    border-bottom-color: var(--border);
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 3rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    text-decoration: none;
                    color: var(--text);
                    z-index: 50;
                }
                .nav-logo-word {
                    font-family: var(--serif);
                    font-size: 1.875rem;
                    display: inline-flex;
                    align-items: baseline;
                    gap: 0.08em;
                    perspective: 1000px;
                }
                .nav-logo-glyph {
                    height: 0.65em;
                    width: auto;
                    backface-visibility: visible;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }
                .nav-link {
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: var(--muted);
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.5s ease;
                }
                .nav-link:hover { color: var(--text); }
                .nav-actions {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-cta {
                    padding: 0.75rem 2rem;
                    border: 1px solid var(--border-strong);
                    color: var(--text);
                    font-size: 11px;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                    transition: all 0.5s ease;
                }
                .nav-cta:hover { border-color: var(--text); }
                .nav-mobile-toggle {
                    display: none;
                    align-items: center;
                    gap: 1rem;
                    z-index: 50;
                }
                .burger-menu {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                    color: var(--text);
                }
                .burger-menu span:not(.burger-close) {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: currentColor;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 0;
                    z-index: 30;
                    background: var(--bg);
                    display: none;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 2rem;
                    transform: translateY(-100%);
                    transition: transform 0.5s ease-in-out;
                }
                .mobile-menu.open { transform: translateY(0); }
                .mobile-link {
                    font-family: var(--serif);
                    font-size: 2.25rem;
                    color: var(--muted);
                    text-decoration: none;
                }
                .mobile-link:hover { color: var(--gold); }
                .mobile-cta {
                    margin-top: 2rem;
                    padding: 1rem 2rem;
                    border: 1px solid var(--border-strong);
                    color: var(--text);
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.15em;
                    text-decoration: none;
                }
                @media (max-width: 768px) {
                    .nav-content { padding: 0 1.5rem; }
                    .nav-right { display: none; }
                    .nav-mobile-toggle { display: flex; }
                    .mobile-menu { display: flex; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_pins_body_at_scroll_offset() {
        let lock = BodyLock::at(420.0);
        let styles = lock.styles();
        assert!(styles.contains(&("top", "-420px".to_string())));
        assert!(styles.contains(&("position", "fixed".to_string())));
        assert_eq!(lock.restore_y(), 420.0);
    }

    #[test]
    fn release_clears_everything_the_lock_set() {
        let set: Vec<_> = BodyLock::at(0.0).styles().iter().map(|(p, _)| *p).collect();
        assert_eq!(set, LOCKED_PROPS.to_vec());
    }

    #[test]
    fn logo_transform_formats_degrees() {
        assert_eq!(logo_transform(12.5), "rotateY(12.50deg) translateY(0.08em)");
        assert_eq!(logo_transform(-3.0), "rotateY(-3.00deg) translateY(0.08em)");
    }

    #[test]
    fn only_insights_is_routed() {
        let routed: Vec<_> = NAV_ITEMS.iter().filter(|i| !i.anchor).map(|i| i.label).collect();
        assert_eq!(routed, vec!["Insights"]);
        assert!(NAV_ITEMS.iter().filter(|i| i.anchor).all(|i| i.href.starts_with("/#")));
    }
}
