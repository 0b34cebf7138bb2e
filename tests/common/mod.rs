#![allow(dead_code)]

use std::time::Duration;

use modelslab::{ClientConfig, ModelsLab, ModelsLabClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test_api_key";

/// A configuration pointing at `server` with the shortest allowed polling delay.
pub fn config(server: &MockServer, fetch_retry: u32) -> ClientConfig {
    ClientConfig::new(API_KEY)
        .with_base_url(server.uri())
        .with_fetch_retry(fetch_retry)
        .with_fetch_delay(Duration::from_secs(1))
}

pub fn client(server: &MockServer) -> ModelsLabClient {
    ModelsLabClient::with_config(config(server, 3)).unwrap()
}

pub fn sdk(server: &MockServer) -> ModelsLab {
    ModelsLab::with_client(client(server), false).unwrap()
}

pub fn enterprise_sdk(server: &MockServer) -> ModelsLab {
    ModelsLab::with_client(client(server), true).unwrap()
}

pub fn success(extra: Value) -> ResponseTemplate {
    let mut body = json!({ "status": "success" });
    if let (Some(body), Value::Object(extra)) = (body.as_object_mut(), extra) {
        body.extend(extra);
    }
    ResponseTemplate::new(200).set_body_json(body)
}

/// Mounts a mock answering one POST on `route` with a success envelope.
pub async fn mount_success(server: &MockServer, route: &str, extra: Value) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(success(extra))
        .expect(1)
        .mount(server)
        .await;
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
