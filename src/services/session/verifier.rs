use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Session token (JWT) claims.
///
/// NOTE:
/// - The login flow signs `{ id }` with standard `exp`/`iat`; only `id` is
///   consumed here. `exp` is enforced by `jsonwebtoken::Validation`.
/// - `id` stays optional so that a cryptographically valid token with a
///   missing claim is distinguishable from a verification failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub id: Option<String>,

    pub exp: u64,
    #[serde(default)]
    pub iat: Option<u64>,
}

/// Outcome of inspecting one request's session credential.
///
/// Deterministic given (token, secret, current time); expiry makes it
/// clock-dependent. Every non-`Authenticated` verdict is terminal for the
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// No token was supplied with the request.
    Unauthenticated,
    /// Signature valid and the claim set carries a non-empty `id`.
    Authenticated(String),
    /// Signature valid but `id` is missing or empty.
    InvalidPayload,
    /// Malformed, expired, or signature mismatch; carries the library's
    /// error text verbatim.
    VerificationFailed(String),
}

/// HS256 session-token verifier.
///
/// - Key material is intentionally not printable via Debug.
/// - Holds only read-only state; shared across requests without locking.
#[derive(Clone)]
pub struct SessionVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for SessionVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("SessionVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl SessionVerifier {
    pub fn new(secret: &str, leeway_seconds: u64) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify a session credential (or its absence) into a [`Verdict`].
    ///
    /// Invalid tokens are a normal outcome here, not an error: the caller
    /// pattern-matches the verdict instead of catching anything.
    pub fn verify(&self, token: Option<&str>) -> Verdict {
        let Some(token) = token else {
            return Verdict::Unauthenticated;
        };

        match jsonwebtoken::decode::<SessionClaims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => match data.claims.id.filter(|id| !id.is_empty()) {
                Some(id) => Verdict::Authenticated(id),
                None => Verdict::InvalidPayload,
            },
            Err(e) => Verdict::VerificationFailed(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    const SECRET: &str = "s3cr3t";

    fn sign(claims: &serde_json::Value, secret: &str) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }

    #[test]
    fn missing_token_is_unauthenticated() {
        let verifier = SessionVerifier::new(SECRET, 0);
        assert_eq!(verifier.verify(None), Verdict::Unauthenticated);
    }

    #[test]
    fn valid_token_with_id_authenticates() {
        let verifier = SessionVerifier::new(SECRET, 0);
        let token = sign(&json!({ "id": "u123", "iat": now(), "exp": now() + 3600 }), SECRET);

        assert_eq!(
            verifier.verify(Some(&token)),
            Verdict::Authenticated("u123".to_string())
        );
    }

    #[test]
    fn valid_token_without_id_is_invalid_payload() {
        let verifier = SessionVerifier::new(SECRET, 0);
        let token = sign(&json!({ "iat": now(), "exp": now() + 3600 }), SECRET);

        assert_eq!(verifier.verify(Some(&token)), Verdict::InvalidPayload);
    }

    #[test]
    fn empty_id_is_invalid_payload() {
        let verifier = SessionVerifier::new(SECRET, 0);
        let token = sign(&json!({ "id": "", "exp": now() + 3600 }), SECRET);

        assert_eq!(verifier.verify(Some(&token)), Verdict::InvalidPayload);
    }

    #[test]
    fn tampered_token_surfaces_library_message() {
        let verifier = SessionVerifier::new(SECRET, 0);
        let token = sign(&json!({ "id": "u123", "exp": now() + 3600 }), "not-the-secret");

        let expected = decode_error_text(&token);
        assert_eq!(verifier.verify(Some(&token)), Verdict::VerificationFailed(expected));
    }

    #[test]
    fn expired_token_surfaces_library_message() {
        let verifier = SessionVerifier::new(SECRET, 0);
        let token = sign(&json!({ "id": "42", "iat": now() - 7200, "exp": now() - 3600 }), SECRET);

        let expected = decode_error_text(&token);
        assert_eq!(verifier.verify(Some(&token)), Verdict::VerificationFailed(expected));
    }

    #[test]
    fn garbage_token_fails_verification() {
        let verifier = SessionVerifier::new(SECRET, 0);

        assert!(matches!(
            verifier.verify(Some("not-a-jwt")),
            Verdict::VerificationFailed(_)
        ));
    }

    #[test]
    fn verification_is_idempotent_within_validity_window() {
        let verifier = SessionVerifier::new(SECRET, 0);
        let token = sign(&json!({ "id": "u123", "exp": now() + 3600 }), SECRET);

        let first = verifier.verify(Some(&token));
        let second = verifier.verify(Some(&token));
        assert_eq!(first, Verdict::Authenticated("u123".to_string()));
        assert_eq!(first, second);
    }

    #[test]
    fn one_hour_session_then_expiry() {
        let verifier = SessionVerifier::new(SECRET, 0);

        let fresh = sign(&json!({ "id": "42", "iat": now(), "exp": now() + 3600 }), SECRET);
        assert_eq!(
            verifier.verify(Some(&fresh)),
            Verdict::Authenticated("42".to_string())
        );

        // Same claims after the hour has passed.
        let stale = sign(&json!({ "id": "42", "iat": now() - 3700, "exp": now() - 100 }), SECRET);
        assert!(matches!(
            verifier.verify(Some(&stale)),
            Verdict::VerificationFailed(_)
        ));
    }

    // What jsonwebtoken itself says about this token, so the test doesn't
    // hard-code library error strings.
    fn decode_error_text(token: &str) -> String {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        jsonwebtoken::decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation,
        )
        .unwrap_err()
        .to_string()
    }
}
