use yew::prelude::*;
use log::info;

mod config;
mod content;
mod error;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;
mod components {
    pub mod accordion;
    pub mod icons;
    pub mod reveal;
    pub mod scroll;
    pub mod ui;
}
mod pages {
    pub mod cta;
    pub mod faq;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod landing;
    pub mod navigation;
    pub mod technology;
    pub mod testimonials;
}

use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! { <Landing /> }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting FormLab landing page");
    yew::Renderer::<App>::new().render();
}
