//! `Authorization` header parsing shared by every scheme.

use axum::http::{HeaderMap, header};

use super::error::AuthError;

/// Split a raw header value into `(scheme, credentials)`.
///
/// The value must be exactly two non-empty tokens separated by a single
/// whitespace character (SP or HTAB).
pub fn parse_authorization(raw: &str) -> Result<(&str, &str), AuthError> {
    let mut parts = raw.split([' ', '\t']);

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(credentials), None)
            if !scheme.is_empty() && !credentials.is_empty() =>
        {
            Ok((scheme, credentials))
        }
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Read the `Authorization` header and split it.
///
/// - absent header => `HeaderMissing`
/// - non visible-ASCII value => `MalformedHeader`
pub fn authorization_parts(headers: &HeaderMap) -> Result<(&str, &str), AuthError> {
    let raw = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::HeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::MalformedHeader)?;

    parse_authorization(raw)
}

/// Scheme tokens are case-insensitive (RFC 7235 section 2.1).
pub fn expect_scheme(scheme: &str, expected: &'static str) -> Result<(), AuthError> {
    if scheme.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(AuthError::SchemeMismatch { expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn splits_scheme_and_credentials() {
        assert_eq!(
            parse_authorization("SessionID abc123"),
            Ok(("SessionID", "abc123"))
        );
    }

    #[test]
    fn tab_separates_tokens() {
        assert_eq!(
            parse_authorization("Basic\tYWxpY2U6c2VjcmV0"),
            Ok(("Basic", "YWxpY2U6c2VjcmV0"))
        );
        assert_eq!(
            parse_authorization("SessionID\tabc"),
            Ok(("SessionID", "abc"))
        );
    }

    #[test]
    fn single_token_is_malformed() {
        assert_eq!(
            parse_authorization("SessionID"),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn extra_tokens_are_malformed() {
        assert_eq!(
            parse_authorization("Basic abc def"),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(
            parse_authorization("Basic  abc"),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(
            parse_authorization("Basic \tabc"),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn empty_tokens_are_malformed() {
        assert_eq!(parse_authorization(""), Err(AuthError::MalformedHeader));
        assert_eq!(
            parse_authorization("Basic "),
            Err(AuthError::MalformedHeader)
        );
        assert_eq!(
            parse_authorization(" abc"),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn missing_header_is_reported() {
        let headers = HeaderMap::new();
        assert_eq!(
            authorization_parts(&headers),
            Err(AuthError::HeaderMissing)
        );
    }

    #[test]
    fn opaque_header_bytes_are_malformed() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_bytes(b"Basic \xff\xfe").unwrap(),
        );
        assert_eq!(
            authorization_parts(&headers),
            Err(AuthError::MalformedHeader)
        );
    }

    #[test]
    fn scheme_comparison_ignores_case() {
        assert!(expect_scheme("basic", "Basic").is_ok());
        assert!(expect_scheme("BASIC", "Basic").is_ok());
        assert_eq!(
            expect_scheme("Bearer", "Basic"),
            Err(AuthError::SchemeMismatch { expected: "Basic" })
        );
    }
}
