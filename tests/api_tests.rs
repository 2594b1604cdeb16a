//! API integration tests
//!
//! These run against a live server and database:
//! `cargo run` in one terminal, then `cargo test -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:5000";

/// Client holding a login cookie for the given email
async fn client_for(email: &str) -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client");

    let response = client
        .post(format!("{}/jwt", BASE_URL))
        .json(&json!({ "email": email }))
        .send()
        .await
        .expect("Failed to send token request");
    assert!(response.status().is_success());

    client
}

/// Add a book and return its id
async fn add_book(client: &Client, title: &str, rating: f64, quantity: i64) -> String {
    let response = client
        .post(format!("{}/book/add", BASE_URL))
        .json(&json!({
            "image": "https://example.org/cover.png",
            "title": title,
            "author": "Test Author",
            "category": "test-fixtures",
            "rating": rating,
            "description": "created by the integration tests",
            "quantity": quantity
        }))
        .send()
        .await
        .expect("Failed to send add request");
    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse add response");
    body["id"].as_str().expect("No id in response").to_string()
}

async fn get_quantity(client: &Client, book_id: &str) -> i64 {
    let response = client
        .get(format!("{}/books/{}", BASE_URL, book_id))
        .send()
        .await
        .expect("Failed to send get request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse book");
    body["quantity"].as_i64().expect("No quantity in response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_greeting() {
    let client = Client::new();

    let response = client
        .get(format!("{}/", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "Hello World!");
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_token_sets_cookie() {
    let client = Client::builder().cookie_store(true).build().unwrap();

    let response = client
        .post(format!("{}/jwt", BASE_URL))
        .json(&json!({ "email": "cookie@x.com" }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    assert!(response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("HttpOnly")));

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
}

#[tokio::test]
#[ignore]
async fn test_token_rejects_malformed_email() {
    let client = Client::new();

    let response = client
        .post(format!("{}/jwt", BASE_URL))
        .json(&json!({ "email": "not-an-email" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_list_books_filter_only_returns_available() {
    let client = client_for("lister@x.com").await;
    add_book(&client, "Out of Stock", 3.0, 0).await;
    add_book(&client, "In Stock", 3.0, 2).await;

    let response = client
        .get(format!("{}/books?filter=true", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(!books.is_empty());
    assert!(books.iter().all(|b| b["quantity"].as_i64().unwrap() > 0));
}

#[tokio::test]
#[ignore]
async fn test_popular_books_filter_and_limit() {
    let client = client_for("popular@x.com").await;
    add_book(&client, "Acclaimed", 4.9, 1).await;

    let response = client
        .get(format!("{}/books/popular", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(books.len() <= 6);
    assert!(books.iter().all(|b| b["rating"].as_f64().unwrap() > 4.7));
}

#[tokio::test]
#[ignore]
async fn test_category_listing_matches_exactly() {
    let client = client_for("category@x.com").await;
    add_book(&client, "Categorized", 3.5, 1).await;

    let response = client
        .get(format!("{}/books/category?name=test-fixtures", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(!books.is_empty());
    assert!(books.iter().all(|b| b["category"] == "test-fixtures"));

    // Case-sensitive: a different casing matches nothing
    let response = client
        .get(format!("{}/books/category?name=TEST-FIXTURES", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(books.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_get_book_requires_auth() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/books/67e55044-10b1-426f-9247-bb680e5fe0c8",
            BASE_URL
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_get_book_malformed_id_is_bad_request() {
    let client = client_for("badid@x.com").await;

    let response = client
        .get(format!("{}/books/not-a-uuid", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "invalid_id");
}

#[tokio::test]
#[ignore]
async fn test_update_rejects_malformed_numerics() {
    let client = client_for("update@x.com").await;
    let book_id = add_book(&client, "Updatable", 3.0, 1).await;

    let response = client
        .post(format!("{}/books/update/{}", BASE_URL, book_id))
        .json(&json!({
            "image": "https://example.org/cover.png",
            "title": "Updatable",
            "author": "Test Author",
            "category": "test-fixtures",
            "rating": "not-a-number",
            "description": "d",
            "quantity": 1
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_borrow_and_return_round_trip() {
    let email = "a@x.com";
    let client = client_for(email).await;
    let book_id = add_book(&client, "Borrowable", 4.0, 3).await;

    // Borrow: one loan record appears and quantity drops by exactly 1
    let response = client
        .post(format!("{}/books/borrow/{}", BASE_URL, book_id))
        .json(&json!({ "email": email }))
        .send()
        .await
        .expect("Failed to send borrow request");
    assert_eq!(response.status(), 201);

    let loan: Value = response.json().await.expect("Failed to parse loan");
    let loan_id = loan["id"].as_str().expect("No loan id").to_string();
    assert_eq!(loan["bookId"], book_id.as_str());
    assert_eq!(loan["userEmail"], email);

    assert_eq!(get_quantity(&client, &book_id).await, 2);

    let response = client
        .get(format!(
            "{}/user/borrowed?email={}&validate=true&bookId={}",
            BASE_URL, email, book_id
        ))
        .send()
        .await
        .expect("Failed to send borrowed request");
    let records: Vec<Value> = response.json().await.expect("Failed to parse records");
    assert_eq!(records.len(), 1);

    // Return: the record disappears and quantity is restored
    let response = client
        .get(format!(
            "{}/return?bbId={}&cbId={}&email={}",
            BASE_URL, loan_id, book_id, email
        ))
        .send()
        .await
        .expect("Failed to send return request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deletedCount"], 1);

    assert_eq!(get_quantity(&client, &book_id).await, 3);

    let response = client
        .get(format!(
            "{}/user/borrowed?email={}&validate=true&bookId={}",
            BASE_URL, email, book_id
        ))
        .send()
        .await
        .expect("Failed to send borrowed request");
    let records: Vec<Value> = response.json().await.expect("Failed to parse records");
    assert!(records.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_borrow_with_no_copies_is_conflict() {
    let client = client_for("empty@x.com").await;
    let book_id = add_book(&client, "Exhausted", 4.0, 0).await;

    let response = client
        .post(format!("{}/books/borrow/{}", BASE_URL, book_id))
        .json(&json!({ "email": "empty@x.com" }))
        .send()
        .await
        .expect("Failed to send borrow request");

    assert_eq!(response.status(), 409);
    assert_eq!(get_quantity(&client, &book_id).await, 0);
}

#[tokio::test]
#[ignore]
async fn test_return_of_another_users_loan_deletes_nothing() {
    let owner = client_for("owner@x.com").await;
    let book_id = add_book(&owner, "Guarded", 4.0, 2).await;

    let response = owner
        .post(format!("{}/books/borrow/{}", BASE_URL, book_id))
        .json(&json!({ "email": "owner@x.com" }))
        .send()
        .await
        .expect("Failed to send borrow request");
    assert_eq!(response.status(), 201);
    let loan: Value = response.json().await.expect("Failed to parse loan");
    let loan_id = loan["id"].as_str().expect("No loan id").to_string();

    // The intruder returns the owner's loan id under their own email: the
    // delete filter binds on both fields, so nothing matches.
    let intruder = client_for("intruder@x.com").await;
    let response = intruder
        .get(format!(
            "{}/return?bbId={}&cbId={}&email=intruder@x.com",
            BASE_URL, loan_id, book_id
        ))
        .send()
        .await
        .expect("Failed to send return request");
    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deletedCount"], 0);

    assert_eq!(get_quantity(&owner, &book_id).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_borrowed_listing_for_another_email_is_forbidden() {
    let client = client_for("b@x.com").await;

    let response = client
        .get(format!("{}/user/borrowed?email=a@x.com", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_borrow_for_another_email_is_forbidden() {
    let client = client_for("b@x.com").await;

    let response = client
        .post(format!(
            "{}/books/borrow/67e55044-10b1-426f-9247-bb680e5fe0c8",
            BASE_URL
        ))
        .json(&json!({ "email": "a@x.com" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}
