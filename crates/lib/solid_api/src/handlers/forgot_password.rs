// @zen-component: IDP-ForgotPasswordEndpoint
//
//! Forgot password form endpoint.

use axum::Json;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_TYPE;
use solid_core::handler::AsyncHandler;
use solid_core::http::HttpRequest;
use solid_core::interaction::{FormSubmission, InteractionInput, InteractionResult};

use crate::AppState;
use crate::error::{AppError, AppResult};

/// Largest accepted form body.
const MAX_FORM_BYTES: usize = 64 * 1024;

/// `POST {idp}/forgotpassword` — request a password reset email.
///
/// Accepts `application/x-www-form-urlencoded` or `application/json`. The
/// response is the same whether or not the email belongs to an account.
/// Authorization and other resource headers are ignored.
pub async fn forgot_password_handler(
    State(state): State<AppState>,
    request: Request,
) -> AppResult<Json<InteractionResult>> {
    let view = HttpRequest::from_request(&request);
    let is_json = view
        .header(CONTENT_TYPE)
        .and_then(|value| value.split(';').next())
        .is_some_and(|media| media.trim().eq_ignore_ascii_case("application/json"));
    let body = axum::body::to_bytes(request.into_body(), MAX_FORM_BYTES)
        .await
        .map_err(|e| AppError::Validation(format!("Unreadable request body: {e}")))?;

    let submission = if is_json {
        FormSubmission::from_json(&body)
            .map_err(|e| AppError::Validation(format!("Invalid JSON body: {e}")))?
    } else {
        FormSubmission::from_urlencoded(&body)
    };

    let result = state
        .forgot_password
        .handle(InteractionInput::new(view, submission))
        .await?;
    Ok(Json(result))
}
