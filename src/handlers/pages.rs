//! Static page handlers

use axum::{extract::State, response::Html};

use crate::error::AppResult;
use crate::logic::session::Session;
use crate::AppState;

pub async fn home(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.renderer.home_page()?))
}

pub async fn about(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.renderer.about_page()?))
}

/// The empty assessment form
pub async fn predict_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    Ok(Html(state.renderer.predict_page(&Session::new())?))
}
