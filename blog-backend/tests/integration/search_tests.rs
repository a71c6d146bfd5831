// tests/integration/search_tests.rs

use axum::http::StatusCode;

use crate::common::{
    app_helper::setup_app,
    auth_helper::create_and_authenticate_user,
    request::{create_anonymous_request, send},
    test_data::create_post,
};

fn titles(body: &serde_json::Value) -> Vec<String> {
    body["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_search_matches_title_or_content_case_insensitively() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    create_post(&app, &user.token, "Learning RUST", "week one").await;
    create_post(&app, &user.token, "Gardening", "Rust on the tools").await;
    create_post(&app, &user.token, "Cooking", "pasta").await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/posts/search/rust", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    let mut found = titles(&body);
    found.sort();
    assert_eq!(found, vec!["Gardening", "Learning RUST"]);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    create_post(&app, &user.token, "Discount 100% off", "sale").await;
    create_post(&app, &user.token, "Discount 1000 off", "sale").await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/posts/search/100%25", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), vec!["Discount 100% off"]);
}

#[tokio::test]
async fn test_search_without_matches() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    create_post(&app, &user.token, "Hello", "World").await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/posts/search/nothing", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert!(body["results"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_term_is_not_trimmed() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    create_post(&app, &user.token, "Two words", "here").await;
    create_post(&app, &user.token, "Single", "word").await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/posts/search/%20", None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(titles(&body), vec!["Two words"]);
}
