use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::components::ui::{Card, Section};
use crate::content::TESTIMONIALS;

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <Section>
            <div class="testimonials">
                <h2 class="section-title section-title-small">
                    <span class="gradient-text">{"Loved by Developers"}</span>
                </h2>
                <div class="grid grid-3">
                    { for TESTIMONIALS.iter().map(|testimonial| html! {
                        <Reveal key={testimonial.author}>
                            <Card>
                                <p class="card-text quote">{ format!("\"{}\"", testimonial.quote) }</p>
                                <div>
                                    <p class="quote-author">{ testimonial.author }</p>
                                    <p class="quote-role">{ testimonial.role }</p>
                                </div>
                            </Card>
                        </Reveal>
                    }) }
                </div>
            </div>
        </Section>
    }
}
