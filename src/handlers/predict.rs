//! Prediction submission handler
//!
//! Drives the whole flow of one form submission: validate, predict, explain,
//! render. All state lives in the per-request [`Session`]; the transitions
//! are its only mutators.

use axum::{extract::State, response::Html, Form};
use validator::Validate;

use crate::error::AppResult;
use crate::logic::session::Session;
use crate::models::PatientRecord;
use crate::AppState;

pub async fn submit(
    State(state): State<AppState>,
    Form(record): Form<PatientRecord>,
) -> AppResult<Html<String>> {
    let mut session = Session::new();

    // Server-side backstop behind the native form constraints
    if let Err(errors) = record.validate() {
        session.fail(validation_message(&errors));
        return Ok(Html(state.renderer.predict_page(&session)?));
    }

    session.submit(record.clone());
    tracing::debug!(service = %state.config.api_base_url, "submitting assessment");

    match state.client.assess(&record).await {
        Ok(assessment) => {
            tracing::info!(
                prediction = assessment.prediction.prediction,
                probability = assessment.prediction.probability,
                explained = !assessment.explanation.is_empty(),
                "assessment complete"
            );
            session.succeed(assessment.prediction, assessment.explanation);
        }
        Err(err) => {
            tracing::warn!("assessment failed: {}", err);
            session.fail(err.to_string());
        }
    }

    Ok(Html(state.renderer.predict_page(&session)?))
}

fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.to_string())
        .collect();
    fields.sort();
    format!("Invalid value for: {}", fields.join(", "))
}
