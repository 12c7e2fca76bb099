use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::reveal::Reveal;
use crate::components::ui::{Badge, Button, ButtonVariant, Section};
use crate::config;

#[function_component(CallToAction)]
pub fn call_to_action() -> Html {
    html! {
        <Section class="section-tinted">
            <Reveal class="cta">
                <Badge class="badge-accent cta-badge">{"Get Started Today"}</Badge>
                <h2 class="section-title">
                    <span class="gradient-text">{"Join the Open Source Form Revolution"}</span>
                </h2>
                <p class="cta-text">
                    {"Start creating beautiful forms today. No credit card, no commitments."}
                </p>
                <div class="button-row">
                    <Button class="button-large" href={config::APP_URL}>
                        {"Start Building"}
                        <IconView icon={Icon::ArrowRight} class="icon-trailing" />
                    </Button>
                    <Button variant={ButtonVariant::Outline} class="button-large">
                        {"View Documentation"}
                    </Button>
                </div>
            </Reveal>
        </Section>
    }
}
