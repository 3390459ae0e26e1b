//! HTTP Basic authentication gate.
//!
//! [`authenticate`] resolves the `Authorization: Basic ...` header against the
//! profile store and, on success, stores an [`AuthUser`] in the request
//! extensions for later gates and handlers.
//!
//! Every way of failing (no header, unknown username, wrong password, corrupt
//! stored hash) produces the same 401 response so callers cannot tell which
//! usernames exist. An unknown username still pays for one bcrypt
//! verification so the response time matches too.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};
use std::sync::LazyLock;
use tracing::{debug, warn};

use account_master_core::{AppError, hash_password, verify_password};

use crate::state::AppState;

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Verified against when the username is unknown, so a miss costs the same
/// bcrypt work as a wrong password.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("account-master-unknown-user").ok());

/// The caller identified by [`authenticate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
    pub admin: bool,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.admin
    }
}

/// Reads the identity placed in the extensions by [`authenticate`].
///
/// Fails with 401 on routes that are not behind the gate.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))
    }
}

/// Middleware for `axum::middleware::from_fn_with_state`.
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/user", get(get_users))
///     .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));
/// ```
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(credentials) = req.headers().typed_get::<Authorization<Basic>>() else {
        debug!("Missing or malformed Basic authorization header");
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    let profile = match state.store.user_by_name(credentials.username()) {
        Ok(profile) => profile,
        Err(_) => {
            let password = credentials.password().to_string();
            tokio::task::spawn_blocking(move || {
                if let Some(hash) = DUMMY_HASH.as_deref() {
                    let _ = verify_password(&password, hash);
                }
            })
            .await
            .map_err(AppError::internal)?;

            debug!(username = %credentials.username(), "Authentication failed: unknown username");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let password = credentials.password().to_string();
    let stored_hash = profile.password.clone();
    let verified = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .map_err(AppError::internal)?;

    match verified {
        Ok(true) => {}
        Ok(false) => {
            debug!(username = %profile.username, "Authentication failed: wrong password");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
        Err(e) => {
            warn!(username = %profile.username, error = %e, "Stored password hash is unusable");
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }
    }

    req.extensions_mut().insert(AuthUser {
        username: profile.username,
        admin: profile.admin,
    });

    Ok(next.run(req).await)
}
