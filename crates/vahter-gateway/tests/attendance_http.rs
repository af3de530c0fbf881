//! End-to-end HTTP tests against the in-process router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use vahter_core::{Clock, Timestamp};
use vahter_gateway::attendance::AttendanceForm;
use vahter_gateway::{app_state::AppState, config::VahterConfig, router};

/// Hands out 09:00:00, 09:00:01, ... on successive reads.
#[derive(Default)]
struct TickClock(AtomicU32);

impl Clock for TickClock {
    fn now(&self) -> Timestamp {
        let n = self.0.fetch_add(1, Ordering::SeqCst);
        Timestamp::parse(&format!("2024-05-01 09:{:02}:{:02}", n / 60, n % 60)).unwrap()
    }
}

fn test_app() -> (Router, AppState) {
    let state = AppState::with_clock(VahterConfig::default(), Arc::new(TickClock::default()));
    (router::build_router(state.clone()), state)
}

async fn body_text(resp: Response<Body>) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, body: &str) -> Response<Body> {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap();
    app.clone().oneshot(req).await.unwrap()
}

#[tokio::test]
async fn get_renders_empty_page() {
    let (app, _) = test_app();
    let resp = get(&app, "/").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let ct = resp.headers().get(header::CONTENT_TYPE).unwrap().to_str().unwrap();
    assert!(ct.starts_with("text/html"));

    let html = body_text(resp).await;
    assert!(html.contains("<h1>Vahter</h1>"));
    assert!(html.contains(r#"name="name""#));
    assert!(html.contains("No records yet."));
}

#[tokio::test]
async fn post_scenario_renders_newest_first() {
    let (app, state) = test_app();

    let resp = post_form(&app, "name=Alice&role=Guest&note=").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("<td>Alice</td>"));

    let resp = post_form(&app, "name=++&role=Guest&note=late").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    assert!(!html.contains("<td>late</td>"));
    assert_eq!(state.store().len(), 1);

    post_form(&app, "name=Bob&role=Staff&note=on+duty").await;

    let html = body_text(get(&app, "/").await).await;
    let bob = html.find("<td>Bob</td>").expect("bob rendered");
    let alice = html.find("<td>Alice</td>").expect("alice rendered");
    assert!(bob < alice, "newest record must come first");
    assert!(html.contains("<td>2024-05-01 09:00:01</td><td>Bob</td><td>Staff</td><td>on duty</td>"));
    assert!(html.contains("<td>2024-05-01 09:00:00</td><td>Alice</td><td>Guest</td><td></td>"));

    assert_eq!(state.metrics().registrations(), 2);
    let metrics = body_text(get(&app, "/metrics").await).await;
    assert!(metrics.contains("vahter_records_total{status=\"success\"} 2"));
    assert!(metrics.contains("vahter_records_stored 2"));
}

#[tokio::test]
async fn missing_fields_are_rejected_silently() {
    let (app, state) = test_app();
    let resp = post_form(&app, "name=Alice").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("No records yet."));
    assert!(state.store().is_empty());
    assert_eq!(state.metrics().registrations(), 0);
}

#[tokio::test]
async fn non_form_body_is_treated_as_empty() {
    let (app, state) = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"name":"Alice","role":"Guest"}"#))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(state.store().is_empty());
}

#[tokio::test]
async fn user_text_is_escaped() {
    let (app, _) = test_app();
    post_form(&app, "name=%3Cscript%3Ealert(1)%3C%2Fscript%3E&role=R%26D&note=%22hi%22").await;
    let html = body_text(get(&app, "/").await).await;
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("<td>R&amp;D</td>"));
    assert!(html.contains("<td>&quot;hi&quot;</td>"));
}

#[tokio::test]
async fn http_metrics_use_route_template() {
    let (app, _) = test_app();
    get(&app, "/").await;
    get(&app, "/?utm=1").await;
    post_form(&app, "name=A&role=B").await;

    let metrics = body_text(get(&app, "/metrics").await).await;
    assert!(metrics.contains("vahter_http_requests_total{method=\"GET\",path=\"/\",status=\"200\"} 2"));
    assert!(metrics.contains("vahter_http_requests_total{method=\"POST\",path=\"/\",status=\"200\"} 1"));
    assert!(metrics.contains("vahter_http_requests_in_flight{method=\"GET\",path=\"/\"} 0"));
}

#[tokio::test]
async fn metrics_content_type() {
    let (app, _) = test_app();
    let resp = get(&app, "/metrics").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; version=0.0.4; charset=utf-8"
    );
}

#[tokio::test]
async fn health_and_readiness() {
    let (app, state) = test_app();
    assert_eq!(get(&app, "/healthz").await.status(), StatusCode::OK);
    assert_eq!(get(&app, "/readyz").await.status(), StatusCode::OK);

    state.metrics().set_draining();
    let resp = get(&app, "/readyz").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_text(resp).await, "draining");
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (app, _) = test_app();
    assert_eq!(get(&app, "/nope").await.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_field_keeps_first_value() {
    let (app, state) = test_app();
    let resp = post_form(&app, "name=Alice&name=Alicia&role=Guest&role=Staff").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let records = state.store().list_ordered();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Alice");
    assert_eq!(records[0].role, "Guest");
    assert_eq!(state.metrics().registrations(), 1);
}

#[test]
fn form_pairs_first_wins_and_ignores_unknown_keys() {
    let pairs = vec![
        ("utm".to_owned(), "x".to_owned()),
        ("note".to_owned(), "first".to_owned()),
        ("name".to_owned(), "Bob".to_owned()),
        ("note".to_owned(), "second".to_owned()),
    ];
    assert_eq!(
        AttendanceForm::from_pairs(pairs),
        AttendanceForm {
            name: "Bob".into(),
            role: String::new(),
            note: "first".into(),
        }
    );
}

#[tokio::test]
async fn unmatched_requests_are_counted() {
    let (app, _) = test_app();
    get(&app, "/nope").await;
    get(&app, "/also/missing").await;

    let metrics = body_text(get(&app, "/metrics").await).await;
    assert!(metrics.contains(
        "vahter_http_requests_total{method=\"GET\",path=\"unmatched\",status=\"404\"} 2"
    ));
}
