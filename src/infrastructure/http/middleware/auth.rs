use crate::domain::ports::AuthContext;
use crate::infrastructure::http::middleware::error::WebError;
use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

/// Bearer token of the back-office user, forwarded as-is to the backend.
///
/// The gateway does not verify the token itself; the backend does.
#[derive(Debug, Clone)]
pub struct AdminToken(pub String);

impl AuthContext for AdminToken {
    fn get_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

pub fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = header.trim().split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Require a bearer token on back-office routes and expose it to handlers
pub async fn require_admin_token(request: Request, next: Next) -> Result<Response, WebError> {
    let (mut parts, body) = request.into_parts();

    let token = bearer_token(&parts).ok_or_else(|| {
        tracing::debug!("Rejected admin request without bearer token");
        WebError::Unauthorized
    })?;

    parts.extensions.insert(AdminToken(token));
    Ok(next.run(Request::from_parts(parts, body)).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/admin/dashboard");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(
            bearer_token(&parts_with(Some("Bearer abc.def"))).as_deref(),
            Some("abc.def")
        );
        assert_eq!(
            bearer_token(&parts_with(Some("bearer  xyz "))).as_deref(),
            Some("xyz")
        );
        assert!(bearer_token(&parts_with(Some("Basic dXNlcg=="))).is_none());
        assert!(bearer_token(&parts_with(Some("Bearer "))).is_none());
        assert!(bearer_token(&parts_with(None)).is_none());
    }
}
