use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let status = match &err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::BAD_REQUEST,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    json_error(status, err.to_string())
}

/// Map an extractor rejection (bad path, query, or body) to the JSON error shape.
pub fn rejection_to_response(status: StatusCode, body_text: String) -> axum::response::Response {
    tracing::debug!(%status, detail = %body_text, "request rejected by extractor");
    json_error(status, body_text)
}

/// Give the router's bare 405 (known path, unsupported method) a JSON body.
pub async fn method_not_allowed_to_json(res: axum::response::Response) -> axum::response::Response {
    if res.status() != StatusCode::METHOD_NOT_ALLOWED {
        return res;
    }

    let mut out = json_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed");
    if let Some(allow) = res.headers().get(axum::http::header::ALLOW) {
        out.headers_mut().insert(axum::http::header::ALLOW, allow.clone());
    }
    out
}

pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "detail": detail.into(),
        })),
    )
        .into_response()
}
