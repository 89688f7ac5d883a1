//! Runs against a live MongoDB (`TEST_MONGODB_URI`, default localhost).
//! Use `cargo test -- --ignored` with a server available.

mod common;

use common::TestApp;
use mongodb::bson::oid::ObjectId;
use people_service::models::Person;
use people_service::services::{MongoPeopleRepository, PeopleRepository};
use reqwest::{Client, StatusCode};
use serde_json::json;

#[tokio::test]
#[ignore = "Requires MongoDB running on localhost:27017"]
async fn health_check_pings_mongodb() {
    let app = TestApp::spawn().await;

    let response = Client::new()
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB running on localhost:27017"]
async fn ada_lifecycle_over_http() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/people", app.address))
        .json(&json!({ "name": "Ada", "age": 30, "phonenumbers": ["555-1"] }))
        .send()
        .await
        .expect("Failed to create person");
    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().contains_key("location"));

    let created: Person = response.json().await.expect("Invalid person body");
    let id = created.id.clone().expect("Store did not assign an id");
    let uri = format!("{}/people/{}", app.address, id);

    let fetched: Person = client.get(&uri).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched, created);

    let response = client
        .put(format!("{}/people", app.address))
        .json(&json!({ "id": id, "name": "Ada", "age": 31, "phonenumbers": ["555-1"] }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fetched: Person = client.get(&uri).send().await.unwrap().json().await.unwrap();
    assert_eq!(fetched.age, 31);

    let response = client.delete(&uri).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client.get(&uri).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB running on localhost:27017"]
async fn repository_reports_matches_on_write() {
    let app = TestApp::spawn().await;
    let repo = MongoPeopleRepository::new(app.db.clone());

    let created = repo
        .create(Person {
            id: None,
            name: "Grace".to_string(),
            age: 0,
            phone_numbers: vec![],
        })
        .await
        .unwrap();
    assert_eq!(repo.list_all().await.unwrap(), vec![created.clone()]);

    let ghost = Person {
        id: Some(ObjectId::new().to_hex()),
        ..created.clone()
    };
    assert!(!repo.replace(ghost).await.unwrap());
    assert!(repo.replace(created.clone()).await.unwrap());

    let id = created.id.unwrap();
    assert!(repo.delete_by_id(&id).await.unwrap());
    assert!(!repo.delete_by_id(&id).await.unwrap());
    assert!(repo.get_by_id(&id).await.unwrap().is_none());

    app.cleanup().await;
}
