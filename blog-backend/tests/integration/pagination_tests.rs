// tests/integration/pagination_tests.rs

use axum::http::StatusCode;

use crate::common::{
    app_helper::setup_app,
    auth_helper::create_and_authenticate_user,
    request::{create_anonymous_request, send},
    test_data::create_post,
};

#[tokio::test]
async fn test_list_is_paginated_newest_first() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;

    for i in 1..=12 {
        create_post(&app, &user.token, &format!("Post {}", i), "body").await;
    }

    let (status, page1) = send(&app, create_anonymous_request("GET", "/posts", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page1["count"], 12);
    assert_eq!(page1["page"], 1);
    assert_eq!(page1["page_size"], 10);
    assert_eq!(page1["total_pages"], 2);
    assert_eq!(page1["next"], 2);
    assert!(page1["previous"].is_null());
    let results = page1["results"].as_array().unwrap();
    assert_eq!(results.len(), 10);
    assert_eq!(results[0]["title"], "Post 12");

    let (status, page2) = send(
        &app,
        create_anonymous_request("GET", "/posts?page=2", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page2["results"].as_array().unwrap().len(), 2);
    assert!(page2["next"].is_null());
    assert_eq!(page2["previous"], 1);
    assert_eq!(page2["results"][1]["title"], "Post 1");
}

#[tokio::test]
async fn test_page_size_is_clamped() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    for i in 0..3 {
        create_post(&app, &user.token, &format!("P{}", i), "body").await;
    }

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/posts?page_size=1000", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page_size"], 100);
    assert_eq!(body["results"].as_array().unwrap().len(), 3);

    let (_, body) = send(
        &app,
        create_anonymous_request("GET", "/posts?page_size=2", None),
    )
    .await;
    assert_eq!(body["total_pages"], 2);
}

#[tokio::test]
async fn test_page_out_of_range() {
    let (app, _db) = setup_app().await;

    // 空の一覧の1ページ目は有効
    let (status, body) = send(&app, create_anonymous_request("GET", "/posts", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 0);
    assert_eq!(body["total_pages"], 0);

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/posts?page=5", None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Invalid page.");
}

#[tokio::test]
async fn test_huge_page_number_is_invalid_page() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    create_post(&app, &user.token, "Only post", "body").await;

    let uri = format!("/posts?page={}", u64::MAX);
    let (status, body) = send(&app, create_anonymous_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Invalid page.");

    let uri = format!("/posts/search/only?page={}", u64::MAX);
    let (status, body) = send(&app, create_anonymous_request("GET", &uri, None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Invalid page.");
}
