use log::{error, warn};
use thiserror::Error;
use yew::prelude::*;

use super::error_boundary::use_error_reporter;

/// Why a section could not be produced. Only `MissingContent` is handled in
/// place; anything `Broken` goes up to the page's error boundary.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SectionError {
    #[error("no content available for {0}")]
    MissingContent(&'static str),
    #[error("{0}")]
    Broken(String),
}

impl SectionError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SectionError::MissingContent(_))
    }
}

pub type SectionResult = Result<Html, SectionError>;

pub fn failed_title(name: &str) -> String {
    if name.trim().is_empty() {
        "Failed to load component".to_string()
    } else {
        format!("Failed to load {}", name)
    }
}

#[function_component(SectionLoader)]
pub fn section_loader() -> Html {
    html! {
        <div class="section-loader" aria-busy="true" aria-label="Loading section">
            <div class="section-loader-ring"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazyLoadErrorProps {
    pub name: AttrValue,
    pub on_retry: Callback<()>,
}

#[function_component(LazyLoadError)]
pub fn lazy_load_error(props: &LazyLoadErrorProps) -> Html {
    let onclick = {
        let on_retry = props.on_retry.clone();
        Callback::from(move |_: MouseEvent| on_retry.emit(()))
    };

    html! {
        <div class="lazy-error">
            <div class="lazy-error-inner">
                <div class="lazy-error-icon" aria-hidden="true">{"↻"}</div>
                <h3>{failed_title(&props.name)}</h3>
                <p>{"We couldn't load this section. Please check your connection and try again."}</p>
                <button class="btn-outline" {onclick}>{"Retry"}</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LazySectionProps {
    pub name: &'static str,
    /// Produces the section. Called again on every retry.
    pub render: Callback<(), SectionResult>,
}

/// Renders one independently failing section. A sibling's failure never
/// reaches this section's output.
#[function_component(LazySection)]
pub fn lazy_section(props: &LazySectionProps) -> Html {
    let attempt = use_state(|| 0u32);
    let report = use_error_reporter();

    // Re-evaluated per render; `attempt` only exists to force one.
    let outcome = props.render.emit(());

    let broken = match &outcome {
        Err(e) if !e.is_recoverable() => Some(e.to_string()),
        _ => None,
    };
    {
        let name = props.name;
        use_effect_with_deps(
            move |broken| {
                if let Some(message) = broken {
                    report.emit(format!("{}: {}", name, message));
                }
                || ()
            },
            broken,
        );
    }

    match outcome {
        Ok(html) => html,
        Err(SectionError::MissingContent(what)) => {
            warn!("Section {} failed to load ({}), attempt {}", props.name, what, *attempt + 1);
            let on_retry = {
                let attempt = attempt.clone();
                Callback::from(move |_| attempt.set(*attempt + 1))
            };
            html! { <LazyLoadError name={props.name} {on_retry} /> }
        }
        Err(SectionError::Broken(message)) => {
            error!("Section {} is broken: {}", props.name, message);
            html! { <SectionLoader /> }
        }
    }
}

/// Styles shared by the loader and the inline error card.
pub const SECTION_STYLES: &str = r#"
.section-loader {
    width: 100%;
    padding: 6rem 0;
    display: flex;
    align-items: center;
    justify-content: center;
}
.section-loader-ring {
    width: 1.5rem;
    height: 1.5rem;
    border: 2px solid rgba(197, 160, 89, 0.2);
    border-top-color: var(--gold);
    border-radius: 50%;
    animation: spin 0.8s linear infinite;
}
.lazy-error {
    width: 100%;
    padding: 6rem 0;
    display: flex;
    align-items: center;
    justify-content: center;
}
.lazy-error-inner {
    max-width: 28rem;
    text-align: center;
    padding: 0 1.5rem;
}
.lazy-error-icon {
    width: 3rem;
    height: 3rem;
    margin: 0 auto 1.5rem;
    border: 1px solid var(--border);
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: var(--muted);
}
.lazy-error h3 {
    font-family: var(--serif);
    font-size: 1.5rem;
    margin-bottom: 1rem;
}
.lazy-error p {
    color: var(--muted);
    font-size: 0.875rem;
    margin-bottom: 2rem;
}
@keyframes spin { to { transform: rotate(360deg); } }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_missing_content_is_recoverable() {
        assert!(SectionError::MissingContent("articles").is_recoverable());
        assert!(!SectionError::Broken("bad state".into()).is_recoverable());
    }

    #[test]
    fn failed_title_names_the_section() {
        assert_eq!(failed_title("Insights"), "Failed to load Insights");
        assert_eq!(failed_title(""), "Failed to load component");
    }

    #[test]
    fn broken_displays_its_message() {
        assert_eq!(SectionError::Broken("no stats".into()).to_string(), "no stats");
        assert_eq!(
            SectionError::MissingContent("services").to_string(),
            "no content available for services"
        );
    }
}
