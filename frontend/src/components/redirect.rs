use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ReplaceRouteProps {
    pub to: Route,
}

/// Like `Redirect`, but swaps the current history entry instead of pushing,
/// so Back never lands on the address that redirected.
#[function_component(ReplaceRoute)]
pub fn replace_route(props: &ReplaceRouteProps) -> Html {
    let navigator = use_navigator();

    use_effect_with_deps(
        move |to| {
            match navigator {
                Some(navigator) => {
                    info!("Replacing location with {}", to.to_path());
                    navigator.replace(to);
                }
                None => warn!("No router available to redirect to {}", to.to_path()),
            }
            || ()
        },
        props.to.clone(),
    );

    html! {}
}
