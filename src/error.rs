use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("no global `{0}` available")]
    MissingGlobal(&'static str),
    #[error("required element `{0}` not found")]
    MissingElement(String),
    #[error("no filter button carries the active marker")]
    NoActiveFilter,
    #[error("WebGL: {0}")]
    Graphics(String),
    #[error("map: {0}")]
    Map(String),
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        Self::MissingElement(selector.into())
    }
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T, E = PageError> = std::result::Result<T, E>;
