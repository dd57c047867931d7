use axum::http::HeaderMap;
use core_config::Environment;

use super::jwt::SESSION_TTL;

fn secure_flag() -> &'static str {
    if Environment::from_env().use_https() {
        " Secure;"
    } else {
        ""
    }
}

/// Build a Set-Cookie value carrying a session token
pub fn session_cookie(name: &str, token: &str) -> String {
    format!(
        "{}={}; HttpOnly;{} SameSite=Strict; Path=/; Max-Age={}",
        name,
        token,
        secure_flag(),
        SESSION_TTL
    )
}

/// Build a Set-Cookie value that clears a session cookie
pub fn clear_cookie(name: &str) -> String {
    format!(
        "{}=; HttpOnly;{} SameSite=Strict; Path=/; Max-Age=0",
        name,
        secure_flag()
    )
}

/// Extract a cookie value by name from a Cookie header string
pub fn extract_cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(key), Some(value)) if key == name => Some(value.to_string()),
            _ => None,
        }
    })
}

/// Extract a cookie value by name from request headers
pub fn cookie_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    let cookies = headers.get("cookie").and_then(|v| v.to_str().ok())?;
    extract_cookie_value(cookies, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_cookie_value() {
        let cookies = "foo=bar; session_token=abc.def.ghi; other=1";
        assert_eq!(
            extract_cookie_value(cookies, "session_token").as_deref(),
            Some("abc.def.ghi")
        );
        assert_eq!(extract_cookie_value(cookies, "foo").as_deref(), Some("bar"));
        assert!(extract_cookie_value(cookies, "missing").is_none());
    }

    #[test]
    fn test_extract_cookie_value_keeps_equals_in_value() {
        let cookies = "token=a=b=c";
        assert_eq!(extract_cookie_value(cookies, "token").as_deref(), Some("a=b=c"));
    }

    #[test]
    fn test_session_cookie_shape() {
        temp_env::with_var_unset("APP_ENV", || {
            let cookie = session_cookie("session_token", "tok");
            assert!(cookie.starts_with("session_token=tok;"));
            assert!(cookie.contains("HttpOnly"));
            assert!(cookie.contains("Max-Age=3600"));
            assert!(!cookie.contains("Secure"));
        });
    }

    #[test]
    fn test_session_cookie_secure_in_production() {
        temp_env::with_var("APP_ENV", Some("production"), || {
            let cookie = session_cookie("session_token", "tok");
            assert!(cookie.contains("Secure"));
        });
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        temp_env::with_var_unset("APP_ENV", || {
            let cookie = clear_cookie("session_token");
            assert!(cookie.contains("Max-Age=0"));
        });
    }
}
