//! Cookie-backed session provider.
//!
//! # Purpose
//! Persists the signed-in principal in the `user` cookie and reads it back on
//! every request.
//!
//! # Where it fits
//! The guard middleware builds a [`RequestSession`] over the request headers,
//! takes one principal snapshot from it, and hands that snapshot to the route
//! guard and to handlers through request extensions.
//!
//! # Key invariants
//! - The cookie value is base64url(JSON `{name, email, role}`), no padding.
//! - A missing, undecodable or role-less cookie resolves to no principal.
//! - Logout writes the same cookie name with `Max-Age=0`.
//!
//! # Security considerations
//! - The cookie is not signed; anyone able to set cookies for the console
//!   origin can pick a role. It carries no credential material.
use axum::http::header::{COOKIE, InvalidHeaderValue};
use axum::http::{HeaderMap, HeaderValue};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use perceive_authz::{Principal, PrincipalProvider};

pub const SESSION_COOKIE: &str = "user";

/// Cookie attributes for the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCookie {
    pub max_age_secs: u64,
    pub secure: bool,
}

impl SessionCookie {
    pub fn new(max_age_secs: u64, secure: bool) -> Self {
        Self {
            max_age_secs,
            secure,
        }
    }

    /// `Set-Cookie` value storing `principal`.
    ///
    /// # Errors
    /// - Only if the encoded value is not a valid header, which base64url
    ///   output never is.
    pub fn set_cookie(&self, principal: &Principal) -> Result<HeaderValue, InvalidHeaderValue> {
        let value = encode_principal(principal);
        HeaderValue::from_str(&self.render(&value, self.max_age_secs))
    }

    /// `Set-Cookie` value that expires the session.
    pub fn clear_cookie(&self) -> HeaderValue {
        // Attribute text is ASCII and fixed, so construction cannot fail.
        HeaderValue::from_str(&self.render("", 0))
            .unwrap_or_else(|_| HeaderValue::from_static("user=; Path=/; Max-Age=0"))
    }

    fn render(&self, value: &str, max_age: u64) -> String {
        let mut cookie =
            format!("{SESSION_COOKIE}={value}; Path=/; Max-Age={max_age}; HttpOnly; SameSite=Lax");
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

pub fn encode_principal(principal: &Principal) -> String {
    // Serializing a struct of three strings cannot fail.
    let json = serde_json::to_vec(principal).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

pub fn decode_principal(value: &str) -> Option<Principal> {
    let bytes = URL_SAFE_NO_PAD.decode(value.trim()).ok()?;
    let principal: Principal = serde_json::from_slice(&bytes).ok()?;
    if principal.role.is_empty() {
        return None;
    }
    Some(principal)
}

/// Raw value of cookie `name` across all `Cookie` headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Principal provider over one request's headers.
#[derive(Debug, Clone, Copy)]
pub struct RequestSession<'a> {
    headers: &'a HeaderMap,
}

impl<'a> RequestSession<'a> {
    pub fn new(headers: &'a HeaderMap) -> Self {
        Self { headers }
    }
}

impl PrincipalProvider for RequestSession<'_> {
    fn current_principal(&self) -> Option<Principal> {
        cookie_value(self.headers, SESSION_COOKIE).and_then(decode_principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyst() -> Principal {
        Principal::new("Sita Devi", "sita@example.com", "Analyst")
    }

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).expect("cookie header"));
        headers
    }

    #[test]
    fn set_cookie_roundtrips_through_request_session() {
        let cookie = SessionCookie::new(86_400, false)
            .set_cookie(&analyst())
            .expect("set-cookie");
        let rendered = cookie.to_str().expect("ascii");
        assert!(rendered.starts_with("user="));
        assert!(rendered.contains("Max-Age=86400"));
        assert!(rendered.contains("HttpOnly"));
        assert!(!rendered.contains("Secure"));

        let pair = rendered.split(';').next().expect("pair");
        let headers = headers_with_cookie(&format!("theme=dark; {pair}"));
        assert_eq!(
            RequestSession::new(&headers).current_principal(),
            Some(analyst())
        );
    }

    #[test]
    fn secure_flag_is_appended() {
        let cookie = SessionCookie::new(60, true).clear_cookie();
        let rendered = cookie.to_str().expect("ascii");
        assert!(rendered.starts_with("user=;"));
        assert!(rendered.contains("Max-Age=0"));
        assert!(rendered.ends_with("; Secure"));
    }

    #[test]
    fn garbage_cookie_resolves_to_none() {
        for cookie in ["user=%%%", "user=", "user=bm90LWpzb24", "other=1"] {
            let headers = headers_with_cookie(cookie);
            assert_eq!(RequestSession::new(&headers).current_principal(), None, "{cookie}");
        }
        assert_eq!(RequestSession::new(&HeaderMap::new()).current_principal(), None);
    }

    #[test]
    fn roleless_cookie_resolves_to_none() {
        let value = URL_SAFE_NO_PAD.encode(br#"{"name":"A","email":"a@example.com","role":""}"#);
        let headers = headers_with_cookie(&format!("user={value}"));
        assert_eq!(RequestSession::new(&headers).current_principal(), None);

        let value = URL_SAFE_NO_PAD.encode(br#"{"name":"A","email":"a@example.com"}"#);
        let headers = headers_with_cookie(&format!("user={value}"));
        assert_eq!(RequestSession::new(&headers).current_principal(), None);
    }

    #[test]
    fn unknown_role_is_still_a_principal() {
        let principal = Principal::new("Mod", "mod@example.com", "moderator");
        let headers = headers_with_cookie(&format!("user={}", encode_principal(&principal)));
        assert_eq!(
            RequestSession::new(&headers).current_principal(),
            Some(principal)
        );
    }
}
