use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;
use url::Url;

use crate::server::{router, service::player::PlayerClient, state::AppState};


/// Router wired to the test database and mock player service.
fn app(test: &TestContext) -> Router {
    let player_client = PlayerClient::new(
        reqwest::Client::new(),
        Url::parse(&test.player_service_url()).unwrap(),
    );

    router::routes().with_state(AppState::new(test.db.clone(), player_client))
}

/// Sends a request through the router and returns the status and JSON body.
///
/// An empty body is returned as `Value::Null`.
async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(body) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}
