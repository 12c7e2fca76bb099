use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::prelude::*;

use crate::config;
use crate::error::DomError;

/// Whether the page has been scrolled far enough for the header to go opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    pub fn at_offset(offset: f64) -> Self {
        Self {
            scrolled: offset > config::SCROLL_THRESHOLD_PX,
        }
    }

    pub fn is_scrolled(self) -> bool {
        self.scrolled
    }

    pub fn header_class(self) -> &'static str {
        if self.is_scrolled() {
            "site-header scrolled"
        } else {
            "site-header"
        }
    }
}

/// A registered window `scroll` listener. The listener is removed when this
/// value is dropped.
pub struct ScrollSubscription {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ScrollSubscription {
    pub fn acquire(mut on_offset: impl FnMut(f64) + 'static) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;

        let reader = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            let offset = reader.scroll_y().unwrap_or_default();
            on_offset(offset);
        }) as Box<dyn FnMut()>);

        window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            .map_err(DomError::js("add scroll listener"))?;

        debug!("scroll listener registered");
        let subscription = Self { window, callback };

        // One read on top of the scroll events, so a position the browser
        // restored on reload is reflected without waiting for the user to scroll.
        if let Err(e) = subscription
            .callback
            .as_ref()
            .unchecked_ref::<web_sys::js_sys::Function>()
            .call0(&JsValue::NULL)
        {
            warn!("initial scroll read failed: {:?}", e);
        }

        Ok(subscription)
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("scroll", self.callback.as_ref().unchecked_ref())
        {
            warn!("failed to remove scroll listener: {:?}", e);
        } else {
            debug!("scroll listener removed");
        }
    }
}

/// Tracks the window scroll offset for as long as the calling component is mounted.
#[hook]
pub fn use_scroll_state() -> ScrollState {
    let state = use_state_eq(ScrollState::default);

    {
        let setter = state.setter();
        use_effect_with_deps(
            move |_| {
                let subscription =
                    ScrollSubscription::acquire(move |offset| setter.set(ScrollState::at_offset(offset)));
                let subscription = match subscription {
                    Ok(subscription) => Some(subscription),
                    Err(e) => {
                        warn!("header will not track scrolling: {}", e);
                        None
                    }
                };
                move || drop(subscription)
            },
            (),
        );
    }

    *state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unscrolled() {
        let state = ScrollState::default();
        assert!(!state.is_scrolled());
        assert_eq!(state.header_class(), "site-header");
    }

    #[test]
    fn scrolled_iff_offset_above_threshold() {
        for offset in [0.0, 1.0, 19.5, 20.0, 20.5, 21.0, 50.0, 600.0, 12_000.0] {
            let state = ScrollState::at_offset(offset);
            assert_eq!(state.is_scrolled(), offset > 20.0, "offset {}", offset);
        }
    }

    #[test]
    fn scroll_down_and_back_up() {
        let state = ScrollState::default();
        assert_eq!(state.header_class(), "site-header");

        let state = ScrollState::at_offset(50.0);
        assert!(state.is_scrolled());
        assert_eq!(state.header_class(), "site-header scrolled");

        let state = ScrollState::at_offset(0.0);
        assert_eq!(state, ScrollState::default());
        assert_eq!(state.header_class(), "site-header");
    }

    #[test]
    fn offsets_on_the_same_side_compare_equal() {
        assert_eq!(ScrollState::at_offset(5.0), ScrollState::at_offset(20.0));
        assert_eq!(ScrollState::at_offset(300.0), ScrollState::at_offset(21.0));
        assert_ne!(ScrollState::at_offset(20.0), ScrollState::at_offset(20.01));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::test_support::{dispatch_scroll, scroll_to, spacer};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn recording_subscription() -> (ScrollSubscription, Rc<RefCell<Vec<f64>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            ScrollSubscription::acquire(move |offset| seen.borrow_mut().push(offset))
                .expect("acquire scroll subscription")
        };
        (subscription, seen)
    }

    #[wasm_bindgen_test]
    fn reads_offset_once_on_acquire() {
        let (_subscription, seen) = recording_subscription();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[wasm_bindgen_test]
    fn listener_stops_after_drop() {
        let (subscription, seen) = recording_subscription();
        dispatch_scroll();
        assert_eq!(seen.borrow().len(), 2);

        drop(subscription);
        dispatch_scroll();
        dispatch_scroll();
        assert_eq!(seen.borrow().len(), 2);
    }

    #[wasm_bindgen_test]
    fn reports_the_window_offset() {
        let pad = spacer();
        let (subscription, seen) = recording_subscription();

        scroll_to(50.0);
        let last = *seen.borrow().last().expect("offset after scrolling down");
        assert!(ScrollState::at_offset(last).is_scrolled(), "offset {}", last);

        scroll_to(0.0);
        let last = *seen.borrow().last().expect("offset after scrolling up");
        assert_eq!(last, 0.0);

        drop(subscription);
        pad.remove();
    }
}
