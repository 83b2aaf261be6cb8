use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{
    ContactService, ContactSubmitError, ContactSubmitRequest,
};
use portfolio_models::contact::ContactValidationError;
use tracing::debug;

use crate::{
    errors::error,
    middlewares::request_id::RequestId,
    models::contact::{ApiContactAcknowledgement, ApiContactRequest, ApiValidationErrorDetail},
};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/contact", routing::post(submit))
        .with_state(service)
}

#[tracing::instrument(name = "contact", skip_all, fields(request_id = %request_id))]
async fn submit(
    request_id: RequestId,
    service: State<Arc<impl ContactService>>,
    request: Result<Json<ApiContactRequest>, JsonRejection>,
) -> Response {
    let request = match request {
        Ok(Json(request)) => request,
        Err(rejection) => {
            debug!("rejected contact request body: {rejection}");
            return error(rejection.status(), rejection.body_text());
        }
    };

    let request = match ContactSubmitRequest::try_from(request) {
        Ok(request) => request,
        Err(err) => return validation_error(err),
    };

    match service.submit(request).await {
        Ok(acknowledgement) => {
            Json(ApiContactAcknowledgement::from(acknowledgement)).into_response()
        }
        Err(ContactSubmitError::Validation(err)) => validation_error(err),
        Err(err @ ContactSubmitError::Persistence(_)) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

fn validation_error(err: ContactValidationError) -> Response {
    error(
        StatusCode::UNPROCESSABLE_ENTITY,
        ApiValidationErrorDetail::from(err),
    )
}
