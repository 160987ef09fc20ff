//! Mentor routes

use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::{TestApp, TestFixtures};

#[tokio::test]
async fn test_create_mentor_returns_created_document() {
    let app = TestApp::new();

    let (status, body) = app.post("/mentors/create", TestFixtures::ada()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "mentor created successfully!");
    assert_eq!(body["mentor"]["mentorName"], "Ada");
    assert_eq!(body["mentor"]["mentorEmail"], "ada@x.com");
    assert_eq!(body["mentor"]["studentsAssigned"], json!([]));
    assert!(uuid::Uuid::parse_str(body["mentor"]["mentorId"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_mentor_trims_and_escapes_name() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/mentors/create",
            TestFixtures::mentor("  <Ada> & co  ", " ada@x.com "),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["mentor"]["mentorName"], "&lt;Ada&gt; &amp; co");
    assert_eq!(body["mentor"]["mentorEmail"], "ada@x.com");
}

#[tokio::test]
async fn test_create_mentor_reports_every_invalid_field() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/mentors/create", json!({ "mentorName": "   ", "mentorEmail": "nope" }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["field"], "mentorName");
    assert_eq!(errors[1]["field"], "mentorEmail");
}

#[tokio::test]
async fn test_malformed_body_is_a_validation_error() {
    let app = TestApp::new();

    let (status, body) = app
        .send(axum::http::Method::POST, "/mentors/create", None)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "body");
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let app = TestApp::new();
    app.create_mentor(TestFixtures::ada()).await;

    let (status, body) = app
        .post("/mentors/create", TestFixtures::mentor("Other", "ada@x.com"))
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "conflict");

    let (_, mentors) = app.get("/mentors").await;
    assert_eq!(mentors.as_array().unwrap().len(), 1);
    assert_eq!(mentors[0]["mentorName"], "Ada");
}

#[tokio::test]
async fn test_list_and_show_mentors() {
    let app = TestApp::new();
    let ada = app.create_mentor(TestFixtures::ada()).await;
    app.create_mentor(TestFixtures::grace()).await;

    let (status, list) = app.get("/mentors").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["mentorName"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Ada", "Grace"]);

    let (status, shown) = app.get(&format!("/mentors/{ada}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shown["mentorId"], ada.as_str());
}

#[tokio::test]
async fn test_unknown_mentor_is_not_found() {
    let app = TestApp::new();
    let missing = uuid::Uuid::new_v4();

    let (status, body) = app.get(&format!("/mentors/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");

    let (status, _) = app.get(&format!("/mentors/{missing}/students")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_mentor_id_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.get("/mentors/not-a-uuid").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"][0]["field"], "mentorId");
}
