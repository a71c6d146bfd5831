// tests/integration/statistics_tests.rs

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::common::{
    app_helper::setup_app,
    auth_helper::create_and_authenticate_user,
    request::{create_anonymous_request, send},
    test_data::{create_post, insert_post_at},
};

#[tokio::test]
async fn test_statistics_group_posts_by_month() {
    let (app, db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    let other = create_and_authenticate_user(&app).await;

    let at = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
    insert_post_at(&db.connection, user.id, "jan-1", at(2024, 1, 3)).await;
    insert_post_at(&db.connection, user.id, "mar-1", at(2024, 3, 9)).await;
    insert_post_at(&db.connection, user.id, "jan-2", at(2024, 1, 28)).await;
    insert_post_at(&db.connection, user.id, "feb-1", at(2024, 2, 14)).await;
    insert_post_at(&db.connection, other.id, "other", at(2024, 1, 1)).await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", &format!("/statistics/{}", user.id), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], user.id);
    assert_eq!(body["username"], user.username);
    assert_eq!(body["total_posts"], 4);
    assert_eq!(body["total_months"], 3);
    let average = body["average_posts_per_month"].as_f64().unwrap();
    assert!((average - 4.0 / 3.0).abs() < 1e-9);
    assert_eq!(
        body["posts_per_month"],
        json!([
            {"month": "2024-01", "post_count": 2},
            {"month": "2024-02", "post_count": 1},
            {"month": "2024-03", "post_count": 1}
        ])
    );
}

#[tokio::test]
async fn test_statistics_separate_same_month_of_different_years() {
    let (app, db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;

    let at = |y| Utc.with_ymd_and_hms(y, 1, 15, 0, 0, 0).unwrap();
    insert_post_at(&db.connection, user.id, "2023", at(2023)).await;
    insert_post_at(&db.connection, user.id, "2024", at(2024)).await;

    let (_, body) = send(
        &app,
        create_anonymous_request("GET", &format!("/posts/statistics/{}", user.id), None),
    )
    .await;

    assert_eq!(body["total_months"], 2);
    assert_eq!(body["posts_per_month"][0]["month"], "2023-01");
    assert_eq!(body["posts_per_month"][1]["month"], "2024-01");
}

#[tokio::test]
async fn test_statistics_for_user_without_posts() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", &format!("/statistics/{}", user.id), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_posts"], 0);
    assert_eq!(body["total_months"], 0);
    assert_eq!(body["average_posts_per_month"], json!(0));
    assert_eq!(body["posts_per_month"], json!([]));
}

#[tokio::test]
async fn test_statistics_reflect_posts_created_through_api() {
    let (app, _db) = setup_app().await;
    let user = create_and_authenticate_user(&app).await;
    create_post(&app, &user.token, "a", "x").await;
    create_post(&app, &user.token, "b", "y").await;

    let (_, body) = send(
        &app,
        create_anonymous_request("GET", &format!("/statistics/{}", user.id), None),
    )
    .await;

    assert_eq!(body["total_posts"], 2);
    assert_eq!(body["total_months"], 1);
    assert_eq!(body["average_posts_per_month"], json!(2.0));
}

#[tokio::test]
async fn test_statistics_unknown_user() {
    let (app, _db) = setup_app().await;

    let (status, body) = send(
        &app,
        create_anonymous_request("GET", "/statistics/987654", None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"detail": "User not found"}));
}
