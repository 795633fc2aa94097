mod config;

use crate::api::{ClientOptions, Credentials, DynectClient};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub(crate) const TOKEN: &str = "tok-1234";

pub(crate) fn credentials() -> Credentials {
    Credentials::new("customer", "user", "secret")
}

pub(crate) fn options(server: &MockServer) -> ClientOptions {
    ClientOptions::default().with_api_url(server.uri())
}

pub(crate) fn success(data: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "status": "success",
        "data": data,
        "job_id": 1,
        "msgs": [{ "INFO": "done", "SOURCE": "API-B", "ERR_CD": null, "LVL": "INFO" }]
    }))
}

pub(crate) async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/REST/Session/"))
        .and(body_json(json!({
            "customer_name": "customer",
            "user_name": "user",
            "password": "secret",
        })))
        .respond_with(success(json!({ "token": TOKEN, "version": "3.7.0" })))
        .mount(server)
        .await;
}

pub(crate) async fn mount_logout(server: &MockServer) {
    Mock::given(method("DELETE"))
        .and(path("/REST/Session/"))
        .respond_with(success(json!({})))
        .mount(server)
        .await;
}

/// Logged-in client against `server`.
pub(crate) async fn connected(server: &MockServer) -> DynectClient {
    mount_login(server).await;
    DynectClient::connect(credentials(), options(server))
        .await
        .unwrap()
}

pub(crate) async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.unwrap().len()
}
