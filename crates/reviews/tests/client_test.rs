//! Tests the status-to-error mapping of `ReviewsClient`, in particular the
//! 404-as-empty-list behavior, against an in-process fake reviews service.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use reviews::{ReviewsClient, ReviewsError};
use serde_json::json;
use std::collections::HashMap;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client(base_url: &str) -> ReviewsClient {
    ReviewsClient::new(reqwest::Client::new(), format!("{}/v1/reviews", base_url))
}

#[tokio::test]
async fn fetch_filters_by_movie_info_id_query_param() {
    let router = Router::new().route(
        "/v1/reviews",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("movieInfoId").map(String::as_str), Some("abc"));
            Json(json!([
                { "id": "r1", "movieInfoId": "abc", "comment": "Nice", "rating": 4.0 },
                { "id": "r2", "movieInfoId": "abc", "comment": "Excellent", "rating": 5.0 }
            ]))
        }),
    );
    let base_url = serve(router).await;

    let reviews = client(&base_url)
        .fetch_by_movie_info_id("abc")
        .await
        .unwrap();

    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].id.as_deref(), Some("r1"));
    assert_eq!(reviews[0].movie_info_id, "abc");
    assert_eq!(reviews[0].comment, "Nice");
    assert_eq!(reviews[0].rating, 4.0);
    assert_eq!(reviews[1].comment, "Excellent");
}

#[tokio::test]
async fn empty_array_resolves_to_no_reviews() {
    let router = Router::new().route("/v1/reviews", get(|| async { Json(json!([])) }));
    let base_url = serve(router).await;

    let reviews = client(&base_url)
        .fetch_by_movie_info_id("abc")
        .await
        .unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn not_found_resolves_to_empty_list() {
    let router = Router::new().route("/v1/reviews", get(|| async { StatusCode::NOT_FOUND }));
    let base_url = serve(router).await;

    let reviews = client(&base_url)
        .fetch_by_movie_info_id("abc")
        .await
        .unwrap();

    assert!(reviews.is_empty());
}

#[tokio::test]
async fn client_error_carries_status_and_body() {
    let router = Router::new().route(
        "/v1/reviews",
        get(|| async { (StatusCode::BAD_REQUEST, "missing movieInfoId") }),
    );
    let base_url = serve(router).await;

    let err = client(&base_url)
        .fetch_by_movie_info_id("abc")
        .await
        .unwrap_err();

    match err {
        ReviewsError::Client { status_code, body } => {
            assert_eq!(status_code, 400);
            assert_eq!(body, "missing movieInfoId");
        }
        other => panic!("expected Client error, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_carries_response_body() {
    let router = Router::new().route(
        "/v1/reviews",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "overloaded") }),
    );
    let base_url = serve(router).await;

    let err = client(&base_url)
        .fetch_by_movie_info_id("abc")
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewsError::Server { message } if message == "overloaded"));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let router = Router::new().route(
        "/v1/reviews",
        get(|| async { Json(json!({ "not": "an array" })) }),
    );
    let base_url = serve(router).await;

    let err = client(&base_url)
        .fetch_by_movie_info_id("abc")
        .await
        .unwrap_err();

    assert!(matches!(err, ReviewsError::Decode { .. }));
}
