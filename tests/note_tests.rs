use serde_json::json;

mod common;
use common::{timestamp, TestApp};

async fn create_note(app: &TestApp, title: &str, content: &str) -> i64 {
    let response = app
        .post("/notes", &json!({ "title": title, "content": content }))
        .await;
    assert_eq!(response.status(), 201);
    response.json()["id"].as_i64().expect("note id")
}

#[actix_rt::test]
async fn test_create_and_get_note() {
    let app = TestApp::registered().await;

    let id = create_note(&app, "Budget plan", "Keep PAD spending flat").await;

    let response = app.get(&format!("/notes/{id}")).await;
    assert_eq!(response.status(), 200);
    let body = response.json();
    assert_eq!(body["title"], "Budget plan");
    assert_eq!(body["content"], "Keep PAD spending flat");
    assert_eq!(body["userId"], app.user_id.as_str());
}

#[actix_rt::test]
async fn test_create_note_requires_user() {
    let app = TestApp::new().await;

    let response = app
        .post("/notes", &json!({ "title": "t", "content": "c" }))
        .await;

    assert_eq!(response.status(), 404);
}

#[actix_rt::test]
async fn test_create_note_requires_title() {
    let app = TestApp::registered().await;

    let response = app
        .post("/notes", &json!({ "title": "", "content": "c" }))
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(response.json()["error"], "VALIDATION_ERROR");
}

#[actix_rt::test]
async fn test_list_notes_newest_first_with_pagination() {
    let app = TestApp::registered().await;
    let first = create_note(&app, "first", "a").await;
    let second = create_note(&app, "second", "b").await;
    let third = create_note(&app, "third", "c").await;

    let body = app.get("/notes").await.json();
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![third, second, first]);

    let body = app.get("/notes?limit=1&offset=1").await.json();
    let page = body.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"].as_i64(), Some(second));
}

#[actix_rt::test]
async fn test_empty_update_still_advances_updated_at() {
    let app = TestApp::registered().await;
    let id = create_note(&app, "Title", "Content").await;
    let before = app.get(&format!("/notes/{id}")).await.json();

    let response = app.patch(&format!("/notes/{id}"), &json!({})).await;

    assert_eq!(response.status(), 200);
    let after = response.json();
    assert_eq!(after["title"], "Title");
    assert_eq!(after["content"], "Content");
    assert!(timestamp(&after["updatedAt"]) > timestamp(&before["updatedAt"]));
    assert_eq!(timestamp(&after["createdAt"]), timestamp(&before["createdAt"]));
}

#[actix_rt::test]
async fn test_partial_note_update() {
    let app = TestApp::registered().await;
    let id = create_note(&app, "Title", "Content").await;

    let after = app
        .patch(&format!("/notes/{id}"), &json!({ "content": "Revised" }))
        .await
        .json();

    assert_eq!(after["title"], "Title");
    assert_eq!(after["content"], "Revised");
}

#[actix_rt::test]
async fn test_delete_note_requires_matching_owner() {
    let app = TestApp::registered().await;
    let other = app.other_user().await;
    let id = create_note(&app, "Mine", "private").await;

    let response = other.delete(&format!("/notes/{id}")).await;
    assert_eq!(response.status(), 404);
    assert_eq!(response.json()["success"], false);
    assert_eq!(other.get(&format!("/notes/{id}")).await.status(), 404);

    let response = app.delete(&format!("/notes/{id}")).await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.json()["success"], true);
    assert_eq!(app.get(&format!("/notes/{id}")).await.status(), 404);
}
