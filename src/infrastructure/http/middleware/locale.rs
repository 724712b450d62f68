use crate::infrastructure::http::middleware::AppState;
use crate::shared::Locale;
use axum::{
    extract::{Query, Request, State},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
    middleware::Next,
    response::Response,
};
use serde::Deserialize;

/// Language for the response: `?lang=` first, then `Accept-Language`, then the
/// configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

#[derive(Debug, Default, Deserialize)]
struct LangParam {
    lang: Option<String>,
}

pub fn resolve_locale(parts: &Parts, default: Locale) -> Locale {
    let from_query = Query::<LangParam>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(param)| param.lang)
        .and_then(|lang| lang.parse::<Locale>().ok());

    let from_header = || {
        parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(Locale::from_accept_language)
    };

    from_query.or_else(from_header).unwrap_or(default)
}

/// Negotiate the response language once per request
pub async fn negotiate_locale(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let locale = resolve_locale(&parts, state.default_locale);
    parts.extensions.insert(RequestLocale(locale));

    next.run(Request::from_parts(parts, body)).await
}
