use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::components::ui::{Badge, Button, ButtonVariant, FloatingElement, Section};
use crate::content::HERO_HIGHLIGHTS;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <Section class="hero">
            <div class="hero-inner enter-on-mount">
                <Badge class="badge-accent hero-badge">
                    <IconView icon={Icon::Sparkles} class="icon-leading" />
                    {"100% Free and Open Source Forever"}
                </Badge>

                <FloatingElement>
                    <h1 class="hero-title">
                        <span class="gradient-text">{"Professional Forms."}</span>
                        <br />
                        <span class="hero-title-plain">{"Zero Cost."}</span>
                    </h1>
                </FloatingElement>

                <p class="hero-subtitle">
                    {"Create beautiful, powerful forms with our open-source platform. No hidden fees, no limitations, just pure form-building freedom."}
                </p>

                <div class="button-row">
                    <Button class="button-large">
                        {"Start Building Forms"}
                        <IconView icon={Icon::ArrowRight} class="icon-trailing" />
                    </Button>
                    <Button variant={ButtonVariant::Outline} class="button-large">
                        <IconView icon={Icon::Github} class="icon-leading" />
                        {"View on GitHub"}
                    </Button>
                </div>

                <div class="hero-highlights">
                    { for HERO_HIGHLIGHTS.iter().map(|text| html! {
                        <div key={*text} class="hero-highlight">
                            <IconView icon={Icon::Check} class="icon-accent" />
                            { *text }
                        </div>
                    }) }
                </div>
            </div>
        </Section>
    }
}
