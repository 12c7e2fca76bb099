use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring a component up to the host page.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window available")]
    NoWindow,
    #[error("{action} failed: {detail}")]
    Js { action: &'static str, detail: String },
}

impl DomError {
    pub fn js(action: &'static str) -> impl FnOnce(JsValue) -> DomError {
        move |value| DomError::Js {
            action,
            detail: format!("{:?}", value),
        }
    }
}
