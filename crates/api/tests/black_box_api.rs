use std::sync::Arc;

use orgapi_api::app::{SharedStore, build_app};
use orgapi_infra::InMemoryOrganizationStore;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Spawn the production router over a fresh seeded store.
    async fn spawn() -> Self {
        Self::spawn_with(Arc::new(InMemoryOrganizationStore::seeded())).await
    }

    async fn spawn_with(store: SharedStore) -> Self {
        let app = build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/organizations{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create(client: &reqwest::Client, srv: &TestServer, name: &str) -> serde_json::Value {
    let res = client
        .post(srv.url(""))
        .json(&json!({ "name": name }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn seed_organization_is_retrievable() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/0")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "status": "success",
            "statusCode": 200,
            "data": { "organization": { "id": 0, "name": "Test" } },
        })
    );
}

#[tokio::test]
async fn create_returns_201_with_increasing_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let first = create(&client, &srv, "Acme").await;
    assert_eq!(first["status"], "success");
    assert_eq!(first["statusCode"], 201);
    assert_eq!(first["data"]["organization"]["name"], "Acme");
    let first_id = first["data"]["organization"]["id"].as_u64().unwrap();
    assert!(first_id > 0);

    let second = create(&client, &srv, "Globex").await;
    let second_id = second["data"]["organization"]["id"].as_u64().unwrap();
    assert!(second_id > first_id);

    // Created record is readable by id.
    let res = client.get(srv.url(&format!("/{second_id}"))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["data"]["organization"]["name"], "Globex");
}

#[tokio::test]
async fn missing_organization_is_404_fail() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/999")).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["statusCode"], 404);
    assert_eq!(
        body["data"]["organizationId"],
        "Organization with ID '999' not found."
    );
}

#[tokio::test]
async fn non_numeric_id_is_400_fail() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/abc")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert!(body["data"]["organizationId"].is_string());
}

#[tokio::test]
async fn create_without_name_is_rejected_before_the_store() {
    let store = Arc::new(InMemoryOrganizationStore::seeded());
    let srv = TestServer::spawn_with(store.clone()).await;
    let client = reqwest::Client::new();

    let res = client.post(srv.url("")).json(&json!({})).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["statusCode"], 400);
    assert!(body["data"]["body"].is_string());

    // Nothing was inserted.
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn create_rejects_names_outside_length_bounds() {
    let store = Arc::new(InMemoryOrganizationStore::seeded());
    let srv = TestServer::spawn_with(store.clone()).await;
    let client = reqwest::Client::new();

    for name in [String::new(), "x".repeat(256)] {
        let res = client
            .post(srv.url(""))
            .json(&json!({ "name": name }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["status"], "fail");
        assert!(body["data"]["name"].is_string());
    }
    assert_eq!(store.len(), 1);

    // Upper bound is inclusive.
    create(&client, &srv, &"x".repeat(255)).await;
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn malformed_json_is_400_fail() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url(""))
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn list_after_n_creates_returns_n_plus_one() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let names = ["Acme", "Globex", "Initech"];
    for name in names {
        create(&client, &srv, name).await;
    }

    let res = client.get(srv.url("")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "success");

    let orgs = body["data"]["organizations"].as_array().unwrap();
    assert_eq!(orgs.len(), names.len() + 1);
    assert_eq!(orgs[0], json!({ "id": 0, "name": "Test" }));
    let listed: Vec<_> = orgs[1..].iter().map(|o| o["name"].as_str().unwrap()).collect();
    assert_eq!(listed, names);
}

#[tokio::test]
async fn stores_are_isolated_per_app() {
    let a = TestServer::spawn().await;
    let b = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(&client, &a, "OnlyInA").await;

    let res = client.get(b.url("")).send().await.unwrap();
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["data"]["organizations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn schemas_are_published() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(srv.url("/schema")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let create_schema = &body["data"]["schemas"]["createOrganization"];
    assert_eq!(create_schema["body"]["required"], json!(["name"]));
    assert_eq!(create_schema["body"]["properties"]["name"]["maxLength"], 255);
}

#[tokio::test]
async fn unknown_route_is_404_fail() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/widgets", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["data"]["route"], "Route GET:/api/widgets not found.");
}

#[tokio::test]
async fn collection_answers_with_trailing_slash() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/"))
        .json(&json!({ "name": "Acme" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get(srv.url("/")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["data"]["organizations"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unsupported_method_on_known_path_is_404_fail() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for (path, expected) in [
        ("", "Route DELETE:/api/organizations not found."),
        ("/", "Route DELETE:/api/organizations/ not found."),
        ("/0", "Route DELETE:/api/organizations/0 not found."),
    ] {
        let res = client.delete(srv.url(path)).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["status"], "fail");
        assert_eq!(body["data"]["route"], expected);
    }

    // The seed record is untouched.
    let res = client.get(srv.url("/0")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn signed_and_padded_ids_are_400_fail() {
    let srv = TestServer::spawn().await;

    for raw in ["-1", "+1", "%201"] {
        let res = reqwest::get(srv.url(&format!("/{raw}"))).await.unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST, "id {raw}");
        let body: serde_json::Value = res.json().await.unwrap();
        assert_eq!(body["status"], "fail");
        assert!(
            body["data"]["organizationId"]
                .as_str()
                .unwrap()
                .starts_with("must be a non-negative integer")
        );
    }
}

#[tokio::test]
async fn non_string_name_is_not_coerced() {
    let store = Arc::new(InMemoryOrganizationStore::seeded());
    let srv = TestServer::spawn_with(store.clone()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url(""))
        .json(&json!({ "name": 123 }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert!(body["data"]["body"].is_string());
    assert_eq!(store.len(), 1);
}
