use yew::prelude::*;

use crate::components::icons::IconView;
use crate::components::reveal::Reveal;
use crate::components::ui::{Card, Section, SectionTitle};
use crate::content::FEATURES;

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <Section>
            <SectionTitle>{"Why Choose FormLab?"}</SectionTitle>
            <div class="grid grid-2">
                { for FEATURES.iter().map(|feature| html! {
                    <Reveal key={feature.title}>
                        <Card class="card-hover">
                            <div class="feature-body hover-scale">
                                <div class="icon-tile">
                                    <IconView icon={feature.icon} class="icon-accent" />
                                </div>
                                <div>
                                    <h3 class="card-title">{ feature.title }</h3>
                                    <p class="card-text">{ feature.description }</p>
                                </div>
                            </div>
                        </Card>
                    </Reveal>
                }) }
            </div>
        </Section>
    }
}
