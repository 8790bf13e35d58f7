//! Session Cookie
//!
//! The backend token lives in a single cookie. These helpers parse and build
//! the `document.cookie` strings; the browser side only moves strings around.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Name of the cookie holding the backend token
pub const SESSION_COOKIE: &str = "authToken";

/// Characters not allowed raw in a cookie value
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

/// Extract the token from a `document.cookie` string.
///
/// Matches the cookie name exactly, so `notauthToken=x` is not a session.
/// An empty value counts as no session.
pub fn token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| percent_decode_str(value.trim()).decode_utf8_lossy().into_owned())
        .filter(|token| !token.is_empty())
}

pub fn is_logged_in(cookies: &str) -> bool {
    token_from_cookies(cookies).is_some()
}

/// Cookie assignment storing `token` for the whole site
pub fn session_cookie(token: &str) -> String {
    format!(
        "{}={}; path=/; SameSite=Lax",
        SESSION_COOKIE,
        utf8_percent_encode(token, COOKIE_VALUE)
    )
}

/// Cookie assignment that makes the browser drop the session
pub fn expired_session_cookie() -> String {
    format!("{}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/;", SESSION_COOKIE)
}

/// `Authorization` header value for a token
pub fn auth_header(token: &str) -> String {
    format!("Token {}", token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_found_among_cookies() {
        assert_eq!(token_from_cookies("authToken=abc123"), Some("abc123".to_string()));
        assert_eq!(
            token_from_cookies("theme=dark; authToken=abc123; lang=en"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_name_must_match_exactly() {
        assert_eq!(token_from_cookies("notauthToken=x"), None);
        assert_eq!(token_from_cookies("authTokenOld=x"), None);
        assert!(!is_logged_in("notauthToken=x; theme=dark"));
    }

    #[test]
    fn test_empty_or_missing() {
        assert!(!is_logged_in(""));
        assert!(!is_logged_in("authToken="));
        assert!(!is_logged_in("theme=dark"));
    }

    #[test]
    fn test_value_roundtrips_through_encoding() {
        let cookie = session_cookie("a b;c");
        let assignment = cookie.split("; ").next().unwrap();
        assert_eq!(assignment, "authToken=a%20b%3Bc");
        assert_eq!(token_from_cookies(assignment), Some("a b;c".to_string()));
    }

    #[test]
    fn test_expired_cookie_clears_session() {
        let cookie = expired_session_cookie();
        assert!(cookie.starts_with("authToken=;"));
        assert!(cookie.contains("1970"));
        assert!(!is_logged_in(cookie.split(';').next().unwrap()));
    }

    #[test]
    fn test_auth_header() {
        assert_eq!(auth_header("abc"), "Token abc");
    }
}
