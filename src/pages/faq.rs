use yew::prelude::*;

use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::reveal::Reveal;
use crate::components::ui::{Section, SectionTitle};
use crate::content::FAQS;

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <Section>
            <SectionTitle>{"Common Questions"}</SectionTitle>
            <div class="faq-list">
                <Accordion>
                    { for FAQS.iter().map(|faq| html! {
                        <Reveal key={faq.question}>
                            <AccordionItem trigger={faq.question}>
                                { faq.answer }
                            </AccordionItem>
                        </Reveal>
                    }) }
                </Accordion>
            </div>
        </Section>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{mount_point, settle};
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{Element, HtmlElement};

    fn nth(root: &Element, selector: &str, index: u32) -> Element {
        root.query_selector_all(selector)
            .expect("query")
            .item(index)
            .expect("element present")
            .dyn_into::<Element>()
            .expect("element node")
    }

    fn expanded(root: &Element) -> Vec<String> {
        (0..FAQS.len() as u32)
            .map(|i| {
                nth(root, ".accordion-trigger", i)
                    .get_attribute("aria-expanded")
                    .unwrap_or_default()
            })
            .collect()
    }

    fn click_trigger(root: &Element, index: u32) {
        nth(root, ".accordion-trigger", index)
            .dyn_into::<HtmlElement>()
            .expect("button element")
            .click();
    }

    fn open_answers(root: &Element) -> u32 {
        root.query_selector_all(".accordion-content").expect("query").length()
    }

    #[wasm_bindgen_test]
    async fn clicking_second_question_opens_only_its_answer() {
        let root = mount_point();
        let app = yew::Renderer::<Faq>::with_root(root.clone()).render();
        settle().await;

        assert_eq!(expanded(&root), vec!["false", "false", "false"]);
        assert_eq!(open_answers(&root), 0);

        click_trigger(&root, 1);
        settle().await;

        assert_eq!(expanded(&root), vec!["false", "true", "false"]);
        assert_eq!(open_answers(&root), 1);
        let answer = nth(&root, ".accordion-content", 0).text_content().unwrap_or_default();
        assert_eq!(answer, FAQS[1].answer);

        click_trigger(&root, 1);
        settle().await;
        assert_eq!(expanded(&root), vec!["false", "false", "false"]);
        assert_eq!(open_answers(&root), 0);

        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn panels_open_independently() {
        let root = mount_point();
        let app = yew::Renderer::<Faq>::with_root(root.clone()).render();
        settle().await;

        click_trigger(&root, 0);
        settle().await;
        click_trigger(&root, 2);
        settle().await;

        assert_eq!(expanded(&root), vec!["true", "false", "true"]);
        assert_eq!(open_answers(&root), 2);

        app.destroy();
        root.remove();
    }
}
