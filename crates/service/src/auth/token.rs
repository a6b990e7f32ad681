//! HS256 bearer tokens: `sub` carries the user id, `exp` the expiry.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::AuthError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: usize,
    exp: usize,
}

/// Issue a bearer token bound to `user_id`, valid for `ttl_minutes`.
pub fn issue(secret: &str, user_id: Uuid, ttl_minutes: i64) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::minutes(ttl_minutes)).timestamp() as usize,
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| AuthError::TokenError(e.to_string()))
}

/// Resolve a bearer token back to the owning user id.
/// Malformed, tampered or expired tokens all come back as `Unauthorized`.
pub fn resolve(secret: &str, token: &str) -> Result<Uuid, AuthError> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    let data = decode::<Claims>(token, &key, &validation).map_err(|_| AuthError::Unauthorized)?;
    Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_then_resolve_round_trips() {
        let uid = Uuid::new_v4();
        let token = issue("secretik", uid, 30).unwrap();
        assert_eq!(resolve("secretik", &token).unwrap(), uid);
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let token = issue("secretik", Uuid::new_v4(), 30).unwrap();
        assert!(matches!(resolve("other", &token), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn garbage_token_is_unauthorized() {
        assert!(matches!(resolve("secretik", "not.a.jwt"), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let token = issue("secretik", Uuid::new_v4(), -5).unwrap();
        assert!(matches!(resolve("secretik", &token), Err(AuthError::Unauthorized)));
    }
}
