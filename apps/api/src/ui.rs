//! The single-page UI shell. All pipeline work happens behind
//! POST /api/v1/analyze; the page script only collects inputs, drives one
//! submission at a time, and renders the outcome.

use askama::Template;
use axum::response::Html;

use crate::errors::AppError;

#[derive(Template)]
#[template(path = "index.html")]
struct HomePage<'a> {
    version: &'a str,
}

/// GET /
pub async fn home_handler() -> Result<Html<String>, AppError> {
    let page = HomePage {
        version: env!("CARGO_PKG_VERSION"),
    };
    Ok(Html(page.render()?))
}
