use log::error;
use yew::prelude::*;

/// Handed down to everything inside an [`ErrorBoundary`]. Emitting a message
/// replaces the boundary's children with the recovery screen.
#[derive(Clone, PartialEq)]
pub struct ErrorReporter(pub Callback<String>);

#[hook]
pub fn use_error_reporter() -> Callback<String> {
    use_context::<ErrorReporter>()
        .map(|reporter| reporter.0)
        .unwrap_or_else(|| Callback::from(|message: String| error!("Unhandled render error: {}", message)))
}

#[derive(Properties, PartialEq)]
pub struct ErrorBoundaryProps {
    pub children: Children,
}

#[function_component(ErrorBoundary)]
pub fn error_boundary(props: &ErrorBoundaryProps) -> Html {
    let failure = use_state(|| None::<String>);
    // Bumped on reset so the children remount from scratch.
    let generation = use_state(|| 0u32);

    let reporter = {
        let failure = failure.clone();
        ErrorReporter(Callback::from(move |message: String| {
            error!("Error caught by boundary: {}", message);
            failure.set(Some(message));
        }))
    };

    let reset = {
        let failure = failure.clone();
        let generation = generation.clone();
        Callback::from(move |_: MouseEvent| {
            failure.set(None);
            generation.set(*generation + 1);
        })
    };

    if let Some(message) = &*failure {
        return html! {
            <div class="error-boundary">
                <div class="error-boundary-inner">
                    <div class="error-boundary-icon" aria-hidden="true">{"!"}</div>
                    <h1>{"Something went wrong"}</h1>
                    <p>{"We encountered an unexpected error. Please try refreshing the page or contact our support team if the problem persists."}</p>
                    if cfg!(debug_assertions) {
                        <pre class="error-boundary-detail">{message.clone()}</pre>
                    }
                    <div class="error-boundary-actions">
                        <button class="btn-outline" onclick={reset}>{"Try Again"}</button>
                        <a class="btn-muted" href="/#contact">{"Contact Support"}</a>
                    </div>
                </div>
                <style>
                    {r#"
                    .error-boundary {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1.5rem;
                    }
                    .error-boundary-inner {
                        max-width: 42rem;
                        text-align: center;
                    }
                    .error-boundary-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 2rem;
                        border: 1px solid var(--border);
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        color: var(--muted);
                    }
                    .error-boundary h1 {
                        font-family: var(--serif);
                        font-size: 3rem;
                        margin-bottom: 1.5rem;
                    }
                    .error-boundary p {
                        color: var(--muted);
                        font-size: 1.125rem;
                        margin-bottom: 3rem;
                    }
                    .error-boundary-detail {
                        text-align: left;
                        font-size: 0.75rem;
                        padding: 1.5rem;
                        margin-bottom: 2rem;
                        background: var(--surface);
                        border: 1px solid var(--border);
                        overflow: auto;
                        max-height: 10rem;
                    }
                    .error-boundary-actions {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    "#}
                </style>
            </div>
        };
    }

    html! {
        <ContextProvider<ErrorReporter> context={reporter}>
            <div key={generation.to_string()} class="error-boundary-scope">
                { for props.children.iter() }
            </div>
        </ContextProvider<ErrorReporter>>
    }
}
