use crate::schemas::AppState;
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use chrono::{Duration, Utc};
use model::entities::{session, user};
use rand::{distributions::Alphanumeric, Rng};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use sha2::{Digest, Sha256};
use tower_cookies::Cookies;
use tracing::{debug, warn};

/// Name of the cookie that carries the raw session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Sessions are valid for a week; expired rows are removed lazily on access.
pub const SESSION_TTL_DAYS: i64 = 7;

/// Hash a password with Argon2 and a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}

/// Verify a password against a stored Argon2 hash.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .and_then(|parsed| Argon2::default().verify_password(password.as_bytes(), &parsed))
        .is_ok()
}

/// SHA-256 hex digest of a session token. Only the digest is persisted.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Create a session row for the user and return the raw token for the cookie.
pub async fn create_session(
    db: &sea_orm::DatabaseConnection,
    user_id: i32,
) -> Result<String, DbErr> {
    let token: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(64)
        .map(char::from)
        .collect();

    let now = Utc::now();
    let new_session = session::ActiveModel {
        token_hash: Set(hash_token(&token)),
        user_id: Set(user_id),
        created_at: Set(now),
        expires_at: Set(now + Duration::days(SESSION_TTL_DAYS)),
        ..Default::default()
    };
    new_session.insert(db).await?;

    debug!("Created session for user {}", user_id);
    Ok(token)
}

/// Delete the session row matching a raw token, if any.
pub async fn destroy_session(db: &sea_orm::DatabaseConnection, token: &str) -> Result<(), DbErr> {
    session::Entity::delete_many()
        .filter(session::Column::TokenHash.eq(hash_token(token)))
        .exec(db)
        .await?;
    Ok(())
}

/// The authenticated user for the current request.
///
/// Resolves the session cookie to a User row. Handlers that take this
/// extractor never run for unauthenticated requests; the rejection is a
/// plain 401 before any business logic.
#[derive(Debug)]
pub struct AuthUser(pub user::Model);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .extensions
            .get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let token = cookies
            .get(SESSION_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .value()
            .to_string();

        let session_row = session::Entity::find()
            .filter(session::Column::TokenHash.eq(hash_token(&token)))
            .one(&state.db)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        if session_row.expires_at < Utc::now() {
            warn!("Rejected expired session for user {}", session_row.user_id);
            let _ = session::Entity::delete_by_id(session_row.id)
                .exec(&state.db)
                .await;
            return Err(StatusCode::UNAUTHORIZED);
        }

        let user_model = user::Entity::find_by_id(session_row.user_id)
            .one(&state.db)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(AuthUser(user_model))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("pw1").expect("hashing failed");
        assert_ne!(hash, "pw1");
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("pw1", &hash));
        assert!(!verify_password("pw2", &hash));
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(!verify_password("pw1", "not-a-phc-string"));
    }

    #[test]
    fn test_token_hash_is_stable_and_opaque() {
        let digest = hash_token("abc");
        assert_eq!(digest, hash_token("abc"));
        assert_ne!(digest, hash_token("abd"));
        // SHA-256 hex digest length
        assert_eq!(digest.len(), 64);
    }
}
