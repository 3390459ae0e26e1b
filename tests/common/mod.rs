use std::time::Duration;

use account_master::account_master_config::{CorsConfig, ServerConfig};
use account_master::account_master_models::{Profile, ProfileId};
use account_master::account_master_store::ProfileStore;
use account_master::router::init_router;
use account_master::state::AppState;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use axum_extra::headers::{Authorization, HeaderMapExt};
use http_body_util::BodyExt;

pub const ADMIN: (&str, &str) = ("root", "rootpass123");
pub const READER: (&str, &str) = ("reader", "readerpass123");

/// Low bcrypt cost keeps seeded logins fast; verification reads the cost
/// from the hash itself.
const TEST_COST: u32 = 4;

pub struct TestApp {
    pub router: Router,
    pub store: ProfileStore,
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        use tower::ServiceExt;

        self.router.clone().oneshot(request).await.unwrap()
    }
}

/// Router over a fresh store holding one admin ([`ADMIN`]) and one plain
/// user ([`READER`]).
pub fn setup_test_app() -> TestApp {
    let store = ProfileStore::new();
    seed_user(&store, ADMIN.0, ADMIN.1, true);
    seed_user(&store, READER.0, READER.1, false);

    let state = AppState::new(store.clone(), CorsConfig::default());
    let server = ServerConfig {
        request_timeout: Duration::from_secs(60),
        ..ServerConfig::default()
    };

    TestApp {
        router: init_router(state, &server),
        store,
    }
}

pub fn seed_user(store: &ProfileStore, username: &str, password: &str, admin: bool) -> ProfileId {
    store
        .create_user(Profile {
            email: format!("{username}@example.com"),
            username: username.to_string(),
            password: bcrypt::hash(password, TEST_COST).unwrap(),
            admin,
            ..Default::default()
        })
        .unwrap()
}

/// Builds a request, optionally with Basic credentials and a JSON body.
pub fn request(
    method: &str,
    uri: &str,
    credentials: Option<(&str, &str)>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }

    let body = match body {
        Some(json) => Body::from(serde_json::to_string(&json).unwrap()),
        None => Body::empty(),
    };
    let mut request = builder.body(body).unwrap();

    if let Some((username, password)) = credentials {
        request
            .headers_mut()
            .typed_insert(Authorization::basic(username, password));
    }

    request
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
