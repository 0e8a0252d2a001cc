//! Endpoint handlers
//!
//! Every interaction is independent: the handler receives the full
//! form state, runs the pipeline at most once, and renders.

use axum::{
    extract::{rejection::FormRejection, Form, Json, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::app_context::AppContext;
use crate::domain::form::FormInput;
use crate::domain::prediction::ViewState;
use crate::server::page;
use crate::server::types::{ErrorResponse, PredictResponse, StatusResponse};

/// GET / - Idle page with default values
pub async fn index(State(ctx): State<Arc<AppContext>>) -> Html<String> {
    let input = FormInput::with_defaults(ctx.options());
    Html(page::render(ctx.options(), &input, &ViewState::idle(), ctx.notice()))
}

/// POST /predict - Form submission from the page
///
/// A body that does not parse (e.g. a cleared number field posts
/// `area=`) renders the Idle page with the parse error instead of
/// a bare 422.
pub async fn predict_form(
    State(ctx): State<Arc<AppContext>>,
    form: Result<Form<FormInput>, FormRejection>,
) -> Html<String> {
    let input = match form {
        Ok(Form(input)) => input,
        Err(rejection) => {
            tracing::warn!("Rejected form submission: {}", rejection.body_text());
            let state = ViewState::Idle {
                error: Some(format!("Invalid form submission: {}", rejection.body_text())),
            };
            let input = FormInput::with_defaults(ctx.options());
            return Html(page::render(ctx.options(), &input, &state, ctx.notice()));
        }
    };

    // Clamped here only so the re-rendered form shows the corrected
    // values; AppContext::predict applies the same bounds again.
    let input   = input.clamped();
    let outcome = ctx.predict(input.clone());

    if let Err(e) = &outcome {
        tracing::warn!("Prediction failed: {e}");
    }

    let state = ViewState::from_outcome(outcome);
    Html(page::render(ctx.options(), &input, &state, ctx.notice()))
}

/// POST /api/predict - JSON variant of the form submission
pub async fn predict_json(
    State(ctx): State<Arc<AppContext>>,
    Json(input): Json<FormInput>,
) -> Response {
    match ctx.predict(input) {
        Ok(prediction) => Json(PredictResponse::from(prediction)).into_response(),
        Err(e) => {
            tracing::warn!("Prediction failed: {e}");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse { error: e.to_string() }),
            )
                .into_response()
        }
    }
}

/// GET /status - Health check
pub async fn status(State(ctx): State<Arc<AppContext>>) -> Json<StatusResponse> {
    let options = ctx.options();
    Json(StatusResponse {
        status:         "healthy".to_string(),
        version:        env!("CARGO_PKG_VERSION").to_string(),
        dataset_loaded: ctx.dataset_loaded(),
        states:         options.states.len(),
        districts:      options.districts.len(),
        seasons:        options.seasons.len(),
        crops:          options.crops.len(),
    })
}
