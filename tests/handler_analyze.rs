mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use drug_review_analyzer::api::handlers::analyze_handler;
use serde_json::json;

fn server(p: &common::TestPipeline) -> TestServer {
    let app = Router::new()
        .route("/api/analyze", post(analyze_handler))
        .with_state(p.state());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_analyze_success() {
    let p = common::pipeline(common::drug_site());
    let server = server(&p);

    let response = server
        .post("/api/analyze")
        .json(&json!({ "drug": "Aspirin" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["drug"], "aspirin");
    assert_eq!(json["drug_url"], "https://www.drugs.com/aspirin.html");
    assert_eq!(
        json["links"]["reviews"],
        "https://www.drugs.com/comments/aspirin/"
    );
    assert_eq!(
        json["links"]["side_effects"],
        "https://www.drugs.com/sfx/aspirin-side-effects.html"
    );
    assert_eq!(json["sentiment"]["positive"], 2);
    assert_eq!(json["sentiment"]["negative"], 1);
    assert_eq!(json["sentiment"]["reviewed"], 3);
    assert!(json["generated_at"].is_string());
    assert_eq!(json["side_effect_summary"], "Summary: Nausea. Headache.");
}

#[tokio::test]
async fn test_analyze_without_resources() {
    let p = common::pipeline(common::drug_site());
    let server = server(&p);

    let response = server
        .post("/api/analyze")
        .json(&json!({ "drug": "co-codamol" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["links"]["reviews"].is_null());
    assert!(json["links"]["side_effects"].is_null());
    assert_eq!(json["sentiment"]["reviewed"], 0);
    assert!(json["sentiment"]["positive_ratio"].is_null());
    assert_eq!(json["side_effect_summary"], "No side effects found.");
}

#[tokio::test]
async fn test_analyze_unknown_drug() {
    let p = common::pipeline(common::drug_site());
    let server = server(&p);

    let response = server
        .post("/api/analyze")
        .json(&json!({ "drug": "Asprin" }))
        .await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["drug"], "Asprin");
}

#[tokio::test]
async fn test_analyze_rejects_invalid_names() {
    let p = common::pipeline(common::drug_site());
    let server = server(&p);

    for drug in ["", "aspirin<script>"] {
        let response = server
            .post("/api/analyze")
            .json(&json!({ "drug": drug }))
            .await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
    }

    assert_eq!(p.pages.request_count(), 0);
}
