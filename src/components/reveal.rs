use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

use crate::error::DomError;

/// One-shot entrance animation state. `Revealed` is absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Pending,
    Revealed,
}

impl RevealState {
    #[must_use]
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            RevealState::Pending if intersecting => RevealState::Revealed,
            other => other,
        }
    }

    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }
}

/// Watches a single element until it first intersects the viewport.
/// The observer is disconnected on drop.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    pub fn watch(element: &Element, on_visible: impl FnOnce() + 'static) -> Result<Self, DomError> {
        let mut on_visible = Some(on_visible);
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let intersecting = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if !intersecting {
                return;
            }
            observer.disconnect();
            if let Some(on_visible) = on_visible.take() {
                on_visible();
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(DomError::js("create intersection observer"))?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Returns the reveal state of the element behind `node`.
#[hook]
pub fn use_reveal(node: NodeRef) -> RevealState {
    let state = use_state_eq(RevealState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |state: &RevealState| {
                let mut guard = None;
                if !state.is_revealed() {
                    let state = *state;
                    match node.cast::<Element>() {
                        Some(element) => {
                            let on_visible = setter.clone();
                            let watch = RevealObserver::watch(&element, move || {
                                debug!("element revealed");
                                on_visible.set(state.observe(true));
                            });
                            match watch {
                                Ok(observer) => guard = Some(observer),
                                Err(e) => {
                                    warn!("showing element without entrance animation: {}", e);
                                    setter.set(RevealState::Revealed);
                                }
                            }
                        }
                        None => setter.set(RevealState::Revealed),
                    }
                }
                move || drop(guard)
            },
            *state,
        );
    }

    *state
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Fades its children in and up the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!("reveal", state.is_revealed().then(|| "visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[test]
    fn stays_pending_until_intersecting() {
        let state = RevealState::default();
        assert_eq!(state.observe(false), RevealState::Pending);
        assert!(!state.observe(false).is_revealed());
        assert_eq!(state.observe(true), RevealState::Revealed);
    }

    #[test]
    fn revealed_is_absorbing() {
        let revealed = RevealState::Pending.observe(true);
        for intersecting in [false, true, false, false, true] {
            assert_eq!(revealed.observe(intersecting), RevealState::Revealed);
        }
    }

    #[tokio::test]
    async fn renders_hidden_before_first_observation() {
        #[function_component]
        fn Harness() -> Html {
            html! { <Reveal class="card-slot"><span>{"hello"}</span></Reveal> }
        }

        let html = ServerRenderer::<Harness>::new().render().await;
        assert!(html.contains("class=\"reveal card-slot\""));
        assert!(html.contains("<span>hello</span>"));
        assert!(!html.contains("visible"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{mount_point, settle};
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;

    const OFFSCREEN: &str = "position: absolute; top: 20000px; height: 40px;";
    const ONSCREEN: &str = "position: absolute; top: 0; height: 40px;";

    #[wasm_bindgen_test]
    async fn observer_fires_once_across_reentry() {
        let root = mount_point();
        root.set_attribute("style", ONSCREEN).expect("set style");

        let fired = Rc::new(Cell::new(0));
        let _observer = {
            let fired = fired.clone();
            RevealObserver::watch(&root, move || fired.set(fired.get() + 1)).expect("watch element")
        };
        settle().await;
        assert_eq!(fired.get(), 1);

        root.set_attribute("style", OFFSCREEN).expect("set style");
        settle().await;
        root.set_attribute("style", ONSCREEN).expect("set style");
        settle().await;
        assert_eq!(fired.get(), 1);

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn offscreen_element_stays_pending() {
        let root = mount_point();
        root.set_attribute("style", OFFSCREEN).expect("set style");

        let fired = Rc::new(Cell::new(0));
        let _observer = {
            let fired = fired.clone();
            RevealObserver::watch(&root, move || fired.set(fired.get() + 1)).expect("watch element")
        };
        settle().await;
        assert_eq!(fired.get(), 0);

        root.remove();
    }

    #[wasm_bindgen_test]
    async fn revealed_element_stays_visible_after_leaving_viewport() {
        #[function_component]
        fn Harness() -> Html {
            html! { <Reveal class="entrance"><span>{"hello"}</span></Reveal> }
        }

        let root = mount_point();
        root.set_attribute("style", ONSCREEN).expect("set style");
        let app = yew::Renderer::<Harness>::with_root(root.clone()).render();
        settle().await;

        let revealed = root
            .query_selector(".reveal")
            .expect("query")
            .expect("reveal rendered");
        assert_eq!(revealed.class_name(), "reveal visible entrance");

        root.set_attribute("style", OFFSCREEN).expect("set style");
        settle().await;
        root.set_attribute("style", ONSCREEN).expect("set style");
        settle().await;
        assert_eq!(revealed.class_name(), "reveal visible entrance");

        app.destroy();
        root.remove();
    }
}
