use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitMessageError};
use folio_models::contact::ContactValidation;
use serde::Serialize;

use super::{error, internal_server_error};
use crate::models::contact::ApiContactMessage;

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit_message))
        .with_state(service)
}

async fn submit_message(
    service: State<Arc<impl ContactFeatureService>>,
    Json(message): Json<ApiContactMessage>,
) -> Response {
    match service.submit_message(message.into()).await {
        Ok(()) => Json(true).into_response(),
        Err(ContactSubmitMessageError::InvalidMessage(validation)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiValidationError {
                detail: "Validation failed",
                errors: validation,
            }),
        )
            .into_response(),
        Err(ContactSubmitMessageError::Send) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, "Could not send message")
        }
        Err(ContactSubmitMessageError::Other(err)) => internal_server_error(err),
    }
}

#[derive(Serialize)]
struct ApiValidationError {
    detail: &'static str,
    errors: ContactValidation,
}
