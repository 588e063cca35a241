use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons the effect could not attach to the page.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("no document body")]
    NoBody,
    #[error("missing #{0}")]
    MissingContainer(&'static str),
    #[error("canvas has no 2d context")]
    NoContext,
    #[error("js: {0}")]
    Js(String),
}

impl From<JsValue> for EffectError {
    fn from(value: JsValue) -> Self {
        EffectError::Js(format!("{:?}", value))
    }
}
