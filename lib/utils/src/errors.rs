use serde::{Deserialize, Serialize};
use thiserror::Error;
use leptos::wasm_bindgen::JsValue;

const MISSING_WINDOW_MESSAGE: &str = "No window is available in this environment.";
const MISSING_DOCUMENT_MESSAGE: &str = "The window has no document.";
const MISSING_DOCUMENT_ELEMENT_MESSAGE: &str = "The document has no root element.";
const MISSING_BODY_MESSAGE: &str = "The document has no body.";

/// Failures of the environment the scroll watcher runs in.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollError {
    #[error("{}", MISSING_WINDOW_MESSAGE)]
    MissingWindow,
    #[error("{}", MISSING_DOCUMENT_MESSAGE)]
    MissingDocument,
    #[error("{}", MISSING_DOCUMENT_ELEMENT_MESSAGE)]
    MissingDocumentElement,
    #[error("{}", MISSING_BODY_MESSAGE)]
    MissingBody,
    #[error("Failed to register scroll listener: {0}")]
    Listener(String),
}

impl From<JsValue> for ScrollError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => ScrollError::Listener(message),
            None => ScrollError::Listener(format!("{value:?}")),
        }
    }
}
