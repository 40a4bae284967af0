use leptos::wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::errors::ScrollError;
use crate::geometry::{max_height, ScrollGeometry};

pub fn get_window() -> Result<Window, ScrollError> {
    web_sys::window().ok_or(ScrollError::MissingWindow)
}

/// Measures the viewport and document of `window` the way every engine agrees on.
pub fn measure_window_geometry(
    window: &Window,
) -> Result<ScrollGeometry, ScrollError> {
    let document = window.document().ok_or(ScrollError::MissingDocument)?;
    let html = document.document_element().ok_or(ScrollError::MissingDocumentElement)?;
    let body = document.body().ok_or(ScrollError::MissingBody)?;

    let html_offset_height = html.dyn_ref::<HtmlElement>()
        .map(|html| html.offset_height())
        .unwrap_or_default() as f64;

    let viewport_height = window.inner_height().ok()
        .and_then(|height| height.as_f64())
        .unwrap_or(html_offset_height);

    let document_height = max_height([
        body.scroll_height() as f64,
        body.offset_height() as f64,
        html.client_height() as f64,
        html.scroll_height() as f64,
        html_offset_height,
    ]);

    let scroll_offset = window.page_y_offset().unwrap_or_default();

    Ok(ScrollGeometry::new(viewport_height, document_height, scroll_offset))
}
