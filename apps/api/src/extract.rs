//! Document Extractor — turns an uploaded resume PDF into model-ready content.
//!
//! Two derivations, chosen by the caller:
//! - [`extract_text`]: concatenated text of all pages (`pdf-extract`).
//! - [`render_first_page`]: page 1 rasterized to a JPEG and base64-wrapped
//!   for the multimodal request body. Rasterization runs on the blocking
//!   pool because pdfium is not async-safe.
//!
//! No OCR, no layout awareness, no multi-page image handling.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Rasterization width for the page-1 image. Wide enough for the model to
/// read body text, small enough to keep the request payload modest.
const RENDER_TARGET_WIDTH: i32 = 1024;

const JPEG_MIME: &str = "image/jpeg";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not parse PDF: {0}")]
    Parse(String),

    #[error("PDF has no pages")]
    EmptyDocument,

    #[error("PDF contains no extractable text")]
    NoText,

    #[error("page rendering failed: {0}")]
    Render(String),
}

/// A single rendered PDF page, encoded for inline transport to the model.
/// Mirrors the `{mime_type, data}` payload the Gemini API expects.
#[derive(Debug, Clone)]
pub struct PageImage {
    pub mime_type: &'static str,
    /// Base64-encoded JPEG bytes.
    pub data: String,
}

/// Extracts the text of every page, naively concatenated.
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(ExtractError::NoText);
    }
    Ok(text)
}

/// Renders the first page to a base64 JPEG [`PageImage`].
pub async fn render_first_page(bytes: Vec<u8>) -> Result<PageImage, ExtractError> {
    tokio::task::spawn_blocking(move || render_first_page_blocking(&bytes))
        .await
        .map_err(|e| ExtractError::Render(format!("render task failed: {e}")))?
}

fn render_first_page_blocking(bytes: &[u8]) -> Result<PageImage, ExtractError> {
    use pdfium_render::prelude::*;

    let pdfium = Pdfium::new(
        Pdfium::bind_to_system_library().map_err(|e| ExtractError::Render(e.to_string()))?,
    );

    let document = pdfium
        .load_pdf_from_byte_slice(bytes, None)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let pages = document.pages();
    if pages.len() == 0 {
        return Err(ExtractError::EmptyDocument);
    }

    let page = pages
        .get(0)
        .map_err(|e| ExtractError::Render(e.to_string()))?;

    let bitmap = page
        .render_with_config(&PdfRenderConfig::new().set_target_width(RENDER_TARGET_WIDTH))
        .map_err(|e| ExtractError::Render(e.to_string()))?;

    let mut jpeg = Cursor::new(Vec::new());
    bitmap
        .as_image()
        .to_rgb8()
        .write_to(&mut jpeg, image::ImageFormat::Jpeg)
        .map_err(|e| ExtractError::Render(e.to_string()))?;

    Ok(PageImage {
        mime_type: JPEG_MIME,
        data: STANDARD.encode(jpeg.into_inner()),
    })
}
