use axum::{
    Router,
    middleware::from_fn,
    routing::{delete, get, post, put},
};

use crate::middleware::role::require_admin;
use crate::modules::users::controller::{
    create_user, delete_user, get_user, get_users, update_user,
};
use crate::state::AppState;

/// Routes mounted under `/user`.
///
/// Reads are open to any authenticated caller; mutations also pass through
/// [`require_admin`]. The authentication gate itself is layered by the
/// caller so it runs first.
pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_users).merge(post(create_user).route_layer(from_fn(require_admin))),
        )
        .route(
            "/{id}",
            get(get_user).merge(
                put(update_user)
                    .merge(delete(delete_user))
                    .route_layer(from_fn(require_admin)),
            ),
        )
}
