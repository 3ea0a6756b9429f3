//! Integration test — drive the forgot password endpoint through the router.

mod common;

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use solid_core::interaction::EmailArgs;
use tokio::sync::mpsc;
use tower::ServiceExt;

use common::{KNOWN_EMAIL, test_app};

fn form_request(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/idp/forgotpassword")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("parse JSON")
}

/// Wait for the next background send.
async fn next_email(emails: &mut mpsc::UnboundedReceiver<EmailArgs>) -> EmailArgs {
    tokio::time::timeout(Duration::from_secs(1), emails.recv())
        .await
        .expect("no email sent in time")
        .expect("sender dropped")
}

/// Give background sends a moment, then check nothing else arrived.
async fn assert_no_email(emails: &mut mpsc::UnboundedReceiver<EmailArgs>) {
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(emails.try_recv().is_err(), "unexpected email sent");
}

#[tokio::test]
async fn known_account_gets_reset_email() {
    let mut app = test_app(None);
    let router = solid_api::router(app.state.clone());

    let resp = router
        .oneshot(form_request("email=alice%40test.email"))
        .await
        .expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        json_body(resp).await,
        serde_json::json!({ "type": "response", "details": { "email": KNOWN_EMAIL } })
    );

    let sent = next_email(&mut app.emails).await;
    let link = "http://test.com/base/idp/resetpassword/record-1";
    assert_eq!(sent.recipient, KNOWN_EMAIL);
    assert_eq!(sent.subject, "Reset your password");
    assert!(sent.text.contains(link), "unexpected text: {}", sent.text);
    assert_eq!(sent.html, format!("<a href=\"{link}\">Reset Password</a>"));
    assert_no_email(&mut app.emails).await;
}

#[tokio::test]
async fn unknown_account_gets_identical_response() {
    let mut app = test_app(None);
    let router = solid_api::router(app.state.clone());

    let known = router
        .clone()
        .oneshot(form_request("email=alice%40test.email"))
        .await
        .expect("request");
    let unknown = router
        .oneshot(form_request("email=mallory%40test.email"))
        .await
        .expect("request");

    assert_eq!(known.status(), unknown.status());
    let unknown_body = json_body(unknown).await;
    assert_eq!(
        unknown_body,
        serde_json::json!({ "type": "response", "details": { "email": "mallory@test.email" } })
    );
    assert_eq!(json_body(known).await["type"], unknown_body["type"]);

    assert_eq!(
        *app.store.requests.lock().unwrap(),
        vec![KNOWN_EMAIL.to_string(), "mallory@test.email".to_string()]
    );
    assert_eq!(next_email(&mut app.emails).await.recipient, KNOWN_EMAIL);
    assert_no_email(&mut app.emails).await;
}

#[tokio::test]
async fn missing_email_is_rejected() {
    let mut app = test_app(None);
    let router = solid_api::router(app.state.clone());

    for body in ["", "email=a%40b.c&email=d%40e.f"] {
        let resp = router
            .clone()
            .oneshot(form_request(body))
            .await
            .expect("request");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(resp).await,
            serde_json::json!({ "error": "validation_error", "message": "Email required" })
        );
    }

    assert!(app.store.requests.lock().unwrap().is_empty());
    assert_no_email(&mut app.emails).await;
}

#[tokio::test]
async fn json_submissions_are_accepted() {
    let mut app = test_app(None);
    let router = solid_api::router(app.state.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/idp/forgotpassword")
        .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(r#"{"email":"alice@test.email"}"#))
        .unwrap();
    let resp = router.oneshot(req).await.expect("request");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(next_email(&mut app.emails).await.recipient, KNOWN_EMAIL);
}

#[tokio::test]
async fn non_string_json_email_is_rejected() {
    let app = test_app(None);
    let router = solid_api::router(app.state.clone());

    let req = Request::builder()
        .method("POST")
        .uri("/idp/forgotpassword")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"email":["alice@test.email"]}"#))
        .unwrap();
    let resp = router.oneshot(req).await.expect("request");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(app.store.requests.lock().unwrap().is_empty());
}

#[tokio::test]
async fn authorization_headers_do_not_gate_recovery() {
    let mut app = test_app(None);
    let router = solid_api::router(app.state.clone());

    for authorization in ["Bearer abc", "DPoP eyJhbGciOi"] {
        let req = Request::builder()
            .method("POST")
            .uri("/idp/forgotpassword")
            .header(header::AUTHORIZATION, authorization)
            .header("slug", "a")
            .header("slug", "b")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("email=alice%40test.email"))
            .unwrap();
        let resp = router.clone().oneshot(req).await.expect("request");

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            serde_json::json!({ "type": "response", "details": { "email": KNOWN_EMAIL } })
        );
        assert_eq!(next_email(&mut app.emails).await.recipient, KNOWN_EMAIL);
    }
}
