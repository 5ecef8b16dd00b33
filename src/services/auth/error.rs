/// Reasons a scheme matcher can reject a request.
///
/// All variants are terminal for the matcher that produced them. The
/// dispatcher turns any of them into a 401 with the scheme's challenge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("missing Authorization header")]
    HeaderMissing,

    #[error("malformed Authorization header (expected '<scheme> <credentials>')")]
    MalformedHeader,

    #[error("authorization scheme is not {expected}")]
    SchemeMismatch { expected: &'static str },

    #[error("malformed credentials: {0}")]
    MalformedCredential(&'static str),
}
