pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};

use chrono::{Duration, Utc};
use common::config::AppConfig;
use db::models::user::Role;
use jsonwebtoken::{EncodingKey, Header, encode};

/// Generates a JWT and its expiry timestamp for a given user.
///
/// TTL and signing secret come from [`AppConfig`]; the config is loaded at
/// startup, so a missing secret never gets this far.
pub fn generate_jwt(user_id: i64, role: Role) -> (String, String) {
    let config = AppConfig::get();

    let expiry = Utc::now() + Duration::minutes(config.jwt_duration_minutes as i64);
    let claims = Claims {
        sub: user_id,
        role,
        exp: expiry.timestamp() as usize,
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret.as_bytes()),
    )
    .expect("Token encoding failed");

    (token, expiry.to_rfc3339())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    fn init_test_config() {
        // SAFETY: test-only; every test module sets the same values, so
        // concurrent initialization is idempotent.
        unsafe {
            std::env::set_var("DATABASE_PATH", "data/test.db");
            std::env::set_var(
                "JWT_SECRET",
                "test_secret_key_for_jwt_generation_and_validation",
            );
            std::env::set_var("JWT_DURATION_MINUTES", "60");
        }
        AppConfig::get();
    }

    #[test]
    fn test_jwt_roundtrip_preserves_claims() {
        init_test_config();

        let (token, expiry) = generate_jwt(42, Role::Faculty);
        assert!(!token.is_empty());

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(AppConfig::get().jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, 42);
        assert_eq!(decoded.claims.role, Role::Faculty);

        let expiry_time = chrono::DateTime::parse_from_rfc3339(&expiry).unwrap();
        assert!(expiry_time > chrono::Utc::now());
    }

    #[test]
    fn test_jwt_has_three_parts() {
        init_test_config();

        let (token, _) = generate_jwt(1, Role::Student);
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_jwt_rejects_wrong_secret() {
        init_test_config();

        let (token, _) = generate_jwt(1, Role::Admin);

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"wrong_secret_key"),
            &Validation::new(Algorithm::HS256),
        );
        assert!(decoded.is_err());
    }
}
