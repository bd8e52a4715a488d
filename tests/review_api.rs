mod common;

use common::{spawn_app, SMOKING_AREA_ID, TOILET_ID};
use reqwest::StatusCode;
use serde_json::{json, Value};

// test me: cargo t --test review_api -- --nocapture
#[tokio::test]
async fn toilet_review_lifecycle() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/toilet/reviews", &app.address))
        .json(&json!({"username": "alice", "content": "clean", "rating": 5, "toiletId": TOILET_ID}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["rating"], 5);
    let id = body["data"]["id"].as_i64().unwrap();
    assert!(id > 0);

    let body: Value = client
        .get(&format!("{}/toilet/{}/reviews?sort=ratingAsc", &app.address, TOILET_ID))
        .send()
        .await
        .expect("Failed to execute request.")
        .json()
        .await
        .unwrap();
    let reviews = body["data"].as_array().unwrap();
    assert!(reviews.iter().any(|review| review["id"] == id));

    let response = client
        .put(&format!("{}/toilet/reviews/{}", &app.address, id))
        .json(&json!({"content": "dirty now", "rating": 1}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["rating"], 1);
    assert_eq!(body["data"]["content"], "dirty now");
    assert_eq!(body["data"]["id"], id);

    let response = client
        .delete(&format!("{}/toilet/reviews/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body.get("data").is_none());

    let response = client
        .delete(&format!("{}/toilet/reviews/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_REVIEW_ID");
}

#[tokio::test]
async fn empty_listing_has_no_payload() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/smoke/{}/reviews", &app.address, SMOKING_AREA_ID))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "No reviews exist.");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn smoke_reviews_are_sorted() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    for rating in [2, 5, 3, 1, 4] {
        let response = client
            .post(&format!("{}/smoke/reviews", &app.address))
            .json(&json!({
                "username": "bob",
                "content": format!("rated {}", rating),
                "rating": rating,
                "smokingAreaId": SMOKING_AREA_ID
            }))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let body: Value = client
        .get(&format!("{}/smoke/{}/reviews?sort=RATINGDESC", &app.address, SMOKING_AREA_ID))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ratings: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|review| review["rating"].as_i64().unwrap())
        .collect();
    assert_eq!(ratings, vec![5, 4, 3, 2, 1]);

    // no sort: newest first
    let body: Value = client
        .get(&format!("{}/smoke/{}/reviews", &app.address, SMOKING_AREA_ID))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"][0]["content"], "rated 4");
}

#[tokio::test]
async fn review_of_unknown_location_is_rejected() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/smoke/reviews", &app.address))
        .json(&json!({"username": "bob", "content": "where?", "rating": 3, "locationId": 999}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_SMOKING_AREA_ID");
}

#[tokio::test]
async fn malformed_body_is_a_bad_request() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/toilet/reviews", &app.address))
        .header("Content-Type", "application/json")
        .body(r#"{"username": "alice", "rating": "five"}"#)
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["code"], "INVALID_INPUT_VALUE");
}
