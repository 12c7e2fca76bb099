use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

/// Open/closed state of one accordion panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    #[must_use]
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    pub fn is_open(self) -> bool {
        self.open
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> Html {
    html! {
        <div class={classes!("accordion", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionPanelProps {
    pub trigger: AttrValue,
    pub open: bool,
    pub on_toggle: Callback<()>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Stateless rendering of a panel. The body is only emitted while `open`.
#[function_component(AccordionPanel)]
pub fn accordion_panel(props: &AccordionPanelProps) -> Html {
    let open = props.open;

    html! {
        <div class={classes!("accordion-item", props.class.clone())}>
            <button
                class="accordion-trigger"
                aria-expanded={open.to_string()}
                onclick={props.on_toggle.reform(|_: MouseEvent| ())}
            >
                <span class="accordion-label">{ props.trigger.clone() }</span>
                <span class={classes!("accordion-indicator", open.then(|| "rotated"))}>{"▼"}</span>
            </button>
            if open {
                <div class="accordion-content">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AccordionItemProps {
    pub trigger: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(AccordionItem)]
pub fn accordion_item(props: &AccordionItemProps) -> Html {
    let state = use_state(PanelState::default);

    let toggle = {
        let state = state.clone();
        let trigger = props.trigger.clone();
        Callback::from(move |()| {
            let next = state.toggle();
            debug!("panel {:?} open: {}", &*trigger, next.is_open());
            state.set(next);
        })
    };

    html! {
        <AccordionPanel
            trigger={props.trigger.clone()}
            open={state.is_open()}
            on_toggle={toggle}
            class={props.class.clone()}
        >
            { for props.children.iter() }
        </AccordionPanel>
    }
}
