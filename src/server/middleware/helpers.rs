//! Helper functions for middleware

use actix_web::http::header::HeaderMap;

/// Extract the session token from the request.
///
/// Checks the session cookie first, then an `Authorization: Session <token>`
/// header for non-browser clients.
pub fn extract_session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(cookie_header) = headers.get("cookie") {
        if let Ok(cookie_str) = cookie_header.to_str() {
            let prefix = format!("{}=", cookie_name);
            for cookie in cookie_str.split(';') {
                let cookie = cookie.trim();
                if let Some(stripped) = cookie.strip_prefix(&prefix) {
                    return Some(stripped.to_string());
                }
            }
        }
    }

    if let Some(auth_header) = headers.get("authorization") {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(stripped) = auth_str.strip_prefix("Session ") {
                return Some(stripped.to_string());
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::header::{HeaderName, HeaderValue};

    #[test]
    fn extracts_token_from_cookie_and_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("cookie"),
            HeaderValue::from_static("other=value; session=abc123"),
        );
        assert_eq!(
            extract_session_token(&headers, "session"),
            Some("abc123".to_string())
        );

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("authorization"),
            HeaderValue::from_static("Session xyz789"),
        );
        assert_eq!(
            extract_session_token(&headers, "session"),
            Some("xyz789".to_string())
        );
    }

    #[test]
    fn respects_configured_cookie_name() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("cookie"),
            HeaderValue::from_static("session=abc123"),
        );
        assert_eq!(extract_session_token(&headers, "sid"), None);
    }

    #[test]
    fn absent_token_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_session_token(&headers, "session"), None);
    }
}
