//! Admin-only authorization for Axum.
//!
//! Must be layered inside [`authenticate`](crate::middleware::auth::authenticate):
//! it only reads the [`AuthUser`] that gate leaves behind and never looks at
//! credentials itself.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use account_master_core::AppError;

use crate::middleware::auth::{AuthUser, INVALID_CREDENTIALS};

/// Middleware that lets only admins through.
///
/// - no [`AuthUser`] in the extensions → 401
/// - `admin == false` → 403
///
/// # Example
///
/// ```rust,ignore
/// use axum::{Router, middleware, routing::post};
/// use crate::middleware::role::require_admin;
///
/// let admin_routes = Router::new()
///     .route("/user", post(create_user))
///     .route_layer(middleware::from_fn(require_admin));
/// ```
pub async fn require_admin(req: Request, next: Next) -> Response {
    match authorize(req.extensions().get::<AuthUser>()) {
        Ok(()) => next.run(req).await,
        Err(err) => err.into_response(),
    }
}

/// The decision behind [`require_admin`], usable from handler code.
pub fn authorize(auth_user: Option<&AuthUser>) -> Result<(), AppError> {
    let Some(auth_user) = auth_user else {
        return Err(AppError::unauthorized(INVALID_CREDENTIALS));
    };

    if !auth_user.is_admin() {
        debug!(username = %auth_user.username, "Admin privileges required");
        return Err(AppError::forbidden("Permission denied"));
    }

    Ok(())
}
