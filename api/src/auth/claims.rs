use db::models::user::Role;
use serde::{Deserialize, Serialize};

/// JWT payload: who the caller is and what they may do.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID the token was issued for.
    pub sub: i64,
    /// Expiry as a unix timestamp.
    pub exp: usize,
    /// Site-wide role baked into the token at login time.
    pub role: Role,
}

/// An authenticated caller, extracted from the `Authorization` header.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);
