use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::scroll::{use_scroll_state, ScrollState};
use crate::components::ui::{Badge, Button, ButtonVariant};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub state: ScrollState,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <header class={props.state.header_class()}>
            <div class="nav-content">
                <div class="brand">
                    <span class="wordmark gradient-text">{"FormLab"}</span>
                    <Badge class="badge-accent">{"Open Source"}</Badge>
                </div>

                <div class="nav-actions">
                    <Button variant={ButtonVariant::Ghost} href={config::REPOSITORY_URL}>
                        <IconView icon={Icon::Github} class="icon-leading" />
                        {"Star on GitHub"}
                    </Button>
                    <Button href={config::APP_URL}>
                        {"Get Started"}
                        <IconView icon={Icon::ArrowRight} class="icon-trailing" />
                    </Button>
                </div>
            </div>
        </header>
    }
}

/// Top navigation that turns opaque once the page is scrolled.
#[function_component(Navigation)]
pub fn navigation() -> Html {
    let state = use_scroll_state();
    html! { <NavBar {state} /> }
}
