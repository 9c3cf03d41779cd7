//! Resume analysis — orchestrates the evaluation pipeline.
//!
//! Flow: validate inputs → extract (handler) → compose prompt → model call →
//!       percentage extraction → respond.
//!
//! Every entity here is request-scoped; nothing survives past the response.

pub mod composer;
pub mod handlers;
pub mod percentage;
pub mod prompts;

use tracing::info;

use crate::analysis::composer::{compose, Mode};
use crate::analysis::percentage::extract_match_percentage;
use crate::analysis::prompts::EMBEDDED_IMAGE_NOTE;
use crate::errors::AppError;
use crate::extract::PageImage;
use crate::llm_client::Analyzer;

/// The extracted resume derivation the pipeline runs on. Built once from the
/// uploaded bytes, consumed by exactly one model call.
#[derive(Debug)]
pub enum ResumeContent {
    /// Concatenated text of all pages.
    Text(String),
    /// First page rendered as an inline image.
    Image(PageImage),
}

/// Result of one evaluation: the model's verbatim text plus the best-effort
/// relevance percentage pulled out of it.
#[derive(Debug)]
pub struct Evaluation {
    pub text: String,
    pub match_percentage: Option<f32>,
}

/// Runs the composed prompt (and optional page image) through the analyzer.
///
/// In image mode the prompt's {resume_content} slot gets a fixed note and the
/// page travels as an inline attachment; in text mode the extracted text is
/// substituted directly and no attachment is sent.
pub async fn run_analysis(
    analyzer: &dyn Analyzer,
    mode: Mode,
    job_description: &str,
    resume: &ResumeContent,
) -> Result<Evaluation, AppError> {
    let resume_text = match resume {
        ResumeContent::Text(text) => text.as_str(),
        ResumeContent::Image(_) => EMBEDDED_IMAGE_NOTE,
    };
    let prompt = compose(mode, job_description, resume_text);

    let image = match resume {
        ResumeContent::Image(image) => Some(image),
        ResumeContent::Text(_) => None,
    };

    info!(
        "Running {:?} analysis ({} prompt chars, image: {})",
        mode,
        prompt.len(),
        image.is_some()
    );

    let text = analyzer
        .analyze(&prompt, image)
        .await
        .map_err(|e| AppError::Analysis(e.to_string()))?;

    let match_percentage = extract_match_percentage(&text);

    Ok(Evaluation {
        text,
        match_percentage,
    })
}
