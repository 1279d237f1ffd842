use http::HeaderName;
use http::header::HeaderMap;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[must_use]
pub fn header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Request id carried by `headers`, or `"n/a"`.
#[must_use]
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("n/a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn reads_header_or_placeholder() {
        let mut headers = HeaderMap::new();
        assert_eq!(request_id(&headers), "n/a");

        headers.insert(header(), HeaderValue::from_static("abc-123"));
        assert_eq!(request_id(&headers), "abc-123");
    }
}
