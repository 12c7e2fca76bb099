//! Browser fixtures shared by the `wasm_bindgen_test` suites.

use gloo_timers::future::TimeoutFuture;
use web_sys::{Element, Event, Window};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn window() -> Window {
    web_sys::window().expect("browser window")
}

fn append_div(style: &str) -> Element {
    let document = window().document().expect("document");
    let div = document.create_element("div").expect("create div");
    div.set_attribute("style", style).expect("set style");
    document
        .body()
        .expect("body")
        .append_child(&div)
        .expect("append div");
    div
}

/// Fresh element under `<body>` to render a component into.
pub fn mount_point() -> Element {
    append_div("")
}

/// Makes the document tall enough to scroll.
pub fn spacer() -> Element {
    append_div("height: 5000px;")
}

/// Lets yew's scheduler run and pending intersection callbacks fire.
pub async fn settle() {
    TimeoutFuture::new(100).await;
}

pub fn dispatch_scroll() {
    let event = Event::new("scroll").expect("scroll event");
    window().dispatch_event(&event).expect("dispatch scroll");
}

pub fn scroll_to(offset: f64) {
    window().scroll_to_with_x_and_y(0.0, offset);
    dispatch_scroll();
}
