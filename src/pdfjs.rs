//! JavaScript bindings for PDF.js.
//!
//! Parsing and rasterizing the edition is delegated to PDF.js through a
//! small bridge module; this crate treats the document as an opaque byte
//! blob and only tracks page/zoom state around it.

use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/assets/pdfjs_bridge.js")]
extern "C" {
    /// Parse a PDF from raw bytes and keep it open on the JS side.
    /// Resolves to `{ page_count, width_pt, height_pt }`.
    #[wasm_bindgen(catch)]
    pub async fn open_document(bytes: &[u8]) -> Result<JsValue, JsValue>;

    /// Rasterize one page of the opened document into the canvas with the
    /// given element id. `width` is the fit-to-width base in CSS pixels;
    /// `scale` is the user zoom applied on top of it.
    #[wasm_bindgen(catch)]
    pub async fn render_page(
        page_number: u32,
        scale: f64,
        width: f64,
        canvas_id: &str,
    ) -> Result<JsValue, JsValue>;
}

/// Metadata the bridge reports after opening a document.
#[derive(Deserialize, Clone, Debug)]
pub struct DocumentInfo {
    pub page_count: u32,
    pub width_pt: f64,
    pub height_pt: f64,
}

pub fn document_info(value: JsValue) -> Result<DocumentInfo, String> {
    serde_wasm_bindgen::from_value(value).map_err(|err| err.to_string())
}
