use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers::{test_app_state, test_app_state_with_identity};

async fn send(router: Router, method: &str, uri: &str) -> axum::response::Response {
    router
        .oneshot(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let resp = send(api_routes(test_app_state()), "GET", "/healthz").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn api_requires_session_cookie() {
    for (method, uri) in [
        ("GET", "/api/auth/me"),
        ("POST", "/api/auth/logout"),
        ("GET", "/api/jobs"),
        ("GET", "/api/companies"),
        ("GET", "/api/saved-jobs"),
        ("GET", "/api/my-jobs"),
        ("GET", "/api/applications"),
    ] {
        let resp = send(api_routes(test_app_state()), method, uri).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");
    }
}

#[tokio::test]
async fn login_without_identity_provider_is_unavailable() {
    let resp = send(api_routes(test_app_state()), "GET", "/auth/login").await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Sign-in is not configured");
}

#[tokio::test]
async fn login_redirects_to_provider_with_state_cookie() {
    let resp = send(api_routes(test_app_state_with_identity()), "GET", "/auth/login").await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);

    let location = resp.headers().get(header::LOCATION).unwrap().to_str().unwrap();
    assert!(location.starts_with("https://id.example/authorize?response_type=code&client_id=hirehub-test"));
    let state_param = location.rsplit("state=").next().unwrap();
    assert_eq!(state_param.len(), 64);

    let set_cookie = resp.headers().get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(set_cookie.starts_with(&format!("oauth_state={state_param}")));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("Max-Age=600"));
}

#[tokio::test]
async fn callback_without_state_is_bad_request() {
    let resp = send(api_routes(test_app_state_with_identity()), "GET", "/auth/callback?code=abc").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn callback_with_mismatched_state_is_unauthorized() {
    let req = Request::builder()
        .uri("/auth/callback?code=abc&state=attacker")
        .header(header::COOKIE, "oauth_state=expected")
        .body(Body::empty())
        .unwrap();
    let resp = api_routes(test_app_state_with_identity()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_upload_is_not_found() {
    let resp = send(api_routes(test_app_state()), "GET", "/uploads/resumes/missing.pdf").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[test]
fn upload_errors_map_to_statuses() {
    assert_eq!(upload_error_to_status(&UploadError::MissingFile("resume")), StatusCode::BAD_REQUEST);
    assert_eq!(upload_error_to_status(&UploadError::Empty), StatusCode::BAD_REQUEST);
    assert_eq!(
        upload_error_to_status(&UploadError::UnsupportedType { bucket: "resumes", file_name: "a.exe".to_owned() }),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        upload_error_to_status(&UploadError::Io(std::io::Error::other("disk full"))),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
