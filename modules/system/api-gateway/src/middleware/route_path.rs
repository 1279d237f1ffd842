//! Path rewriting applied before routing.
//!
//! Routes are matched case-insensitively and without regard to a trailing
//! slash: `/HEALTH`, `/health/` and `/health` reach the same handler. Trailing
//! slashes are trimmed by `tower_http::normalize_path`; this module lowers
//! the case of the path. The query string is left untouched.

use axum::extract::Request;
use http::Uri;
use http::uri::PathAndQuery;

/// Rewrite the request path to ASCII lowercase.
#[must_use]
pub fn lowercase_path(mut req: Request) -> Request {
    let path = req.uri().path();
    if !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return req;
    }

    let lowered = match req.uri().query() {
        Some(query) => format!("{}?{query}", path.to_ascii_lowercase()),
        None => path.to_ascii_lowercase(),
    };

    let Ok(path_and_query) = PathAndQuery::try_from(lowered) else {
        return req;
    };
    let mut parts = req.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    if let Ok(uri) = Uri::from_parts(parts) {
        *req.uri_mut() = uri;
    }
    req
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use axum::body::Body;

    fn rewrite(uri: &str) -> String {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        lowercase_path(req).uri().to_string()
    }

    #[test]
    fn lowercases_path() {
        assert_eq!(rewrite("/API/Users/1"), "/api/users/1");
        assert_eq!(rewrite("/HEALTH"), "/health");
    }

    #[test]
    fn query_keeps_its_case() {
        assert_eq!(rewrite("/Health?Mode=X"), "/health?Mode=X");
    }

    #[test]
    fn lowercase_paths_are_unchanged() {
        assert_eq!(rewrite("/api/users?x=1"), "/api/users?x=1");
        assert_eq!(rewrite("/"), "/");
    }

    #[test]
    fn absolute_uri_keeps_scheme_and_authority() {
        assert_eq!(
            rewrite("http://localhost:3000/API/Calculate"),
            "http://localhost:3000/api/calculate"
        );
    }
}
