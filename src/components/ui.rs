use yew::prelude::*;
use yew::{Children, Properties};

use crate::components::reveal::Reveal;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Ghost,
    Outline,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button-primary",
            ButtonVariant::Ghost => "button-ghost",
            ButtonVariant::Outline => "button-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub class: Classes,
    /// Wraps the button in a link when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    pub children: Children,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let button = html! {
        <button class={classes!("button", props.variant.class(), props.class.clone())}>
            { for props.children.iter() }
        </button>
    };

    match &props.href {
        Some(href) => html! { <a class="button-link" href={href.clone()}>{ button }</a> },
        None => button,
    }
}

#[derive(Properties, PartialEq)]
pub struct ContainerProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Badge)]
pub fn badge(props: &ContainerProps) -> Html {
    html! {
        <span class={classes!("badge", props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}

#[function_component(Card)]
pub fn card(props: &ContainerProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(Section)]
pub fn section(props: &ContainerProps) -> Html {
    html! {
        <section class={classes!("section", props.class.clone())}>
            <div class="container">
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <Reveal>
            <h2 class="section-title">
                <span class="gradient-text">{ for props.children.iter() }</span>
            </h2>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingElementProps {
    /// Animation delay in seconds.
    #[prop_or_default]
    pub delay: f64,
    pub children: Children,
}

/// Bobs its children up and down forever.
#[function_component(FloatingElement)]
pub fn floating_element(props: &FloatingElementProps) -> Html {
    html! {
        <div class="floating" style={format!("animation-delay: {}s;", props.delay)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn button_with_href_is_wrapped_in_link() {
        #[function_component]
        fn Harness() -> Html {
            html! {
                <>
                    <Button variant={ButtonVariant::Ghost} href="https://example.com/repo">{"Star"}</Button>
                    <Button variant={ButtonVariant::Outline}>{"Docs"}</Button>
                </>
            }
        }

        let html = ServerRenderer::<Harness>::new().render().await;
        assert!(html.contains("href=\"https://example.com/repo\""));
        assert!(html.contains("button-link"));
        assert!(html.contains("button button-ghost"));
        assert!(html.contains("button button-outline"));
        assert_eq!(html.matches("<a ").count(), 1);
    }
}
