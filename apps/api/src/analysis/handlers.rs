//! Axum route handlers for the Analysis API.

use std::str::FromStr;

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;

use crate::analysis::composer::Mode;
use crate::analysis::{run_analysis, ResumeContent};
use crate::errors::AppError;
use crate::extract;
use crate::llm_client;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// How the resume travels to the model: the rendered first page (the
/// original behavior) or the extracted text of all pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    Image,
    Text,
}

impl FromStr for AttachmentKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "image" => Ok(AttachmentKind::Image),
            "text" => Ok(AttachmentKind::Text),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// The model's evaluation, verbatim.
    pub evaluation: String,
    /// Best-effort figure pulled from the evaluation text; absent when the
    /// model did not produce a recognizable percentage.
    pub match_percentage: Option<f32>,
    pub mode: Mode,
    pub model: &'static str,
}

/// The parsed multipart form, before validation.
#[derive(Debug, Default)]
struct AnalyzeForm {
    job_description: Option<String>,
    mode: Option<String>,
    attachment: Option<String>,
    resume: Option<Bytes>,
}

/// A submission that passed input validation.
#[derive(Debug)]
struct ValidatedSubmission {
    job_description: String,
    mode: Mode,
    attachment: AttachmentKind,
    resume: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart fields: `job_description` (text), `mode` (zero-shot | one-shot |
/// few-shot), `attachment` (image | text, default image), `resume` (PDF).
/// Input validation happens before extraction; extraction before the model
/// call — a rejected submission never reaches the network.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let form = read_form(multipart).await?;
    let submission = validate(form)?;

    let content = match submission.attachment {
        AttachmentKind::Image => {
            ResumeContent::Image(extract::render_first_page(submission.resume.to_vec()).await?)
        }
        AttachmentKind::Text => ResumeContent::Text(extract::extract_text(&submission.resume)?),
    };

    let evaluation = run_analysis(
        state.analyzer.as_ref(),
        submission.mode,
        &submission.job_description,
        &content,
    )
    .await?;

    Ok(Json(AnalyzeResponse {
        evaluation: evaluation.text,
        match_percentage: evaluation.match_percentage,
        mode: submission.mode,
        model: llm_client::MODEL,
    }))
}

fn validate(form: AnalyzeForm) -> Result<ValidatedSubmission, AppError> {
    let job_description = form
        .job_description
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Validation("job description must not be empty".to_string()))?;

    let resume = form
        .resume
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("a resume PDF must be uploaded".to_string()))?;

    let mode = match form.mode {
        Some(s) => s
            .parse::<Mode>()
            .map_err(|_| AppError::Validation(format!("unknown mode '{s}'")))?,
        None => Mode::ZeroShot,
    };

    let attachment = match form.attachment {
        Some(s) => s
            .parse::<AttachmentKind>()
            .map_err(|_| AppError::Validation(format!("unknown attachment kind '{s}'")))?,
        None => AttachmentKind::Image,
    };

    Ok(ValidatedSubmission {
        job_description,
        mode,
        attachment,
        resume,
    })
}

async fn read_form(mut multipart: Multipart) -> Result<AnalyzeForm, AppError> {
    let mut form = AnalyzeForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("malformed multipart request: {e}")))?
    {
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("job_description") => form.job_description = Some(text_field(field).await?),
            Some("mode") => form.mode = Some(text_field(field).await?),
            Some("attachment") => form.attachment = Some(text_field(field).await?),
            Some("resume") => {
                form.resume = Some(field.bytes().await.map_err(|e| {
                    AppError::Validation(format!("could not read resume upload: {e}"))
                })?)
            }
            // Unknown fields are ignored rather than rejected.
            _ => {}
        }
    }

    Ok(form)
}

async fn text_field(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::Validation(format!("could not read form field: {e}")))
}
