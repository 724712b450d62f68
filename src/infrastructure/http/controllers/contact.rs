use crate::infrastructure::http::middleware::{AppState, RequestLocale, WebError, WebResult};
use crate::services::whatsapp::ContactRequest;
use axum::{extract::State, Extension, Json};
use serde_json::{json, Value};

/// POST /api/contact/whatsapp - Click-to-chat link prefilled with the request
pub async fn whatsapp_link(
    State(state): State<AppState>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    Json(request): Json<ContactRequest>,
) -> WebResult<Json<Value>> {
    let url = state
        .whatsapp_service
        .contact_link(&request, locale)
        .ok_or_else(|| WebError::ServiceUnavailable("WhatsApp contact is not configured".to_string()))?;

    Ok(Json(json!({ "url": url })))
}
