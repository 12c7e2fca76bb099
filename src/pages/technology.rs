use yew::prelude::*;

use crate::components::icons::IconView;
use crate::components::reveal::Reveal;
use crate::components::ui::{Card, Section, SectionTitle};
use crate::content::TECHNOLOGIES;

#[function_component(TechnologyStack)]
pub fn technology_stack() -> Html {
    html! {
        <Section class="section-tinted">
            <SectionTitle>{"Powered by Modern Tech"}</SectionTitle>
            <div class="grid grid-4">
                { for TECHNOLOGIES.iter().map(|tech| html! {
                    <Reveal key={tech.name}>
                        <Card class="card-hover card-centered">
                            <div class="tech-body hover-scale">
                                <div class="icon-tile icon-tile-round">
                                    <IconView icon={tech.icon} class="icon-accent icon-large" />
                                </div>
                                <div>
                                    <h3 class="card-title">{ tech.name }</h3>
                                    <p class="card-text card-text-small">{ tech.role }</p>
                                </div>
                            </div>
                        </Card>
                    </Reveal>
                }) }
            </div>
        </Section>
    }
}
