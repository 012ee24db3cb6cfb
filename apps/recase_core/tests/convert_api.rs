use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use recase_core::urls::router;

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn kebab_to_upper() {
    let (status, body) = get("/hello-world?toCase=UPPER").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "originalCase": "KEBAB",
            "targetCase": "UPPER",
            "originalText": "hello-world",
            "convertedText": "HELLO WORLD",
        })
    );
}

#[tokio::test]
async fn snake_to_camel() {
    let (status, body) = get("/hello_world?toCase=CAMEL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["originalCase"], "SNAKE");
    assert_eq!(body["convertedText"], "helloWorld");
}

#[tokio::test]
async fn snake_to_snake_is_identity() {
    let (_, body) = get("/hello_world?toCase=SNAKE").await;
    assert_eq!(body["convertedText"], "hello_world");
}

#[tokio::test]
async fn camel_to_snake() {
    let (status, body) = get("/helloWorld?toCase=SNAKE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["originalCase"], "CAMEL");
    assert_eq!(body["convertedText"], "hello_world");
}

#[tokio::test]
async fn percent_encoded_spaces_split_words() {
    let (status, body) = get("/hello%20world?toCase=PASCAL").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["originalCase"], "UNKNOWN");
    assert_eq!(body["originalText"], "hello world");
    assert_eq!(body["convertedText"], "HelloWorld");
}

#[tokio::test]
async fn missing_text_and_case_report_two_errors() {
    let (status, body) = get("/").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors[0]["message"],
        r#"Text to convert is required. Correct request is: "/<TEXT_TO_CONVERT>?toCase=<CASE_NAME>"."#
    );
    assert_eq!(
        errors[1]["message"],
        r#""toCase" query param is required. Correct request is: "/<TEXT_TO_CONVERT>?toCase=<CASE_NAME>"."#
    );
}

#[tokio::test]
async fn missing_text_alone_reports_one_error() {
    let (status, body) = get("/?toCase=SNAKE").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unsupported_case_reports_one_error() {
    let (status, body) = get("/hello?toCase=BOGUS").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0]["message"],
        "This case is not supported. Available cases: SNAKE, KEBAB, CAMEL, PASCAL, UPPER."
    );
}

#[tokio::test]
async fn responses_are_json() {
    let response = router()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));
}

#[tokio::test]
async fn healthz_reports_ok() {
    let (status, body) = get("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "app": "recase_core" }));
}
