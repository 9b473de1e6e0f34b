use log::warn;
use web_sys::window;
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A stored choice wins over the OS preference.
pub fn initial_theme(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::parse) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

fn stored_theme() -> Option<String> {
    let storage = window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

fn apply_theme(theme: Theme) {
    let Some(window) = window() else { return };
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        if root.class_list().toggle_with_force("dark", theme == Theme::Dark).is_err() {
            warn!("Could not apply {} theme", theme.as_str());
        }
    }
    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_state(|| initial_theme(stored_theme().as_deref(), prefers_dark()));

    use_effect_with_deps(
        |theme| {
            apply_theme(*theme);
            || ()
        },
        *theme,
    );

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_| theme.set(theme.toggled()))
    };

    let context = ThemeContext { theme: *theme, toggle };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| ThemeContext {
        theme: Theme::Light,
        toggle: Callback::from(|_| ()),
    })
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let ThemeContext { theme, toggle } = use_theme();
    let label = format!("Switch to {} mode", theme.toggled().as_str());
    let onclick = Callback::from(move |_: MouseEvent| toggle.emit(()));

    html! {
        <button class="theme-toggle" {onclick} aria-label={label.clone()} title={label}>
            <span class={classes!("theme-icon", "sun", (theme == Theme::Light).then(|| "visible"))}>{"☀"}</span>
            <span class={classes!("theme-icon", "moon", (theme == Theme::Dark).then(|| "visible"))}>{"☾"}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_wins() {
        assert_eq!(initial_theme(Some("light"), true), Theme::Light);
        assert_eq!(initial_theme(Some("dark"), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_preference() {
        assert_eq!(initial_theme(None, true), Theme::Dark);
        assert_eq!(initial_theme(None, false), Theme::Light);
        assert_eq!(initial_theme(Some("sepia"), true), Theme::Dark);
    }

    #[test]
    fn toggling_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }
}
