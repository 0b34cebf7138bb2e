mod common;

use common::{enterprise_sdk, mount_success, sdk, API_KEY};
use modelslab::types::audio::TextToSpeechRequest;
use modelslab::{ModelsLab, ModelsLabError};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn enterprise_mode_switches_the_prefix() {
    let server = MockServer::start().await;
    mount_success(&server, "/v1/enterprise/voice/text_to_speech", json!({})).await;

    let sdk = enterprise_sdk(&server);
    assert!(sdk.is_enterprise());
    assert!(sdk
        .audio()
        .base()
        .base_url()
        .path()
        .ends_with("/v1/enterprise/voice/"));

    sdk.audio()
        .text_to_speech(&TextToSpeechRequest::new("hi"))
        .await
        .unwrap();
}

#[tokio::test]
async fn enterprise_fetch_uses_the_enterprise_prefix() {
    let server = MockServer::start().await;
    mount_success(&server, "/v1/enterprise/images/fetch/7", json!({ "id": 7 })).await;

    let response = enterprise_sdk(&server).community().fetch("7").await.unwrap();
    assert_eq!(response.job_id().as_deref(), Some("7"));
}

#[tokio::test]
async fn maintenance_operations_post_only_the_key() {
    let server = MockServer::start().await;
    for operation in [
        "system_details",
        "restart_server",
        "update",
        "clear_cache",
        "clear_queue",
    ] {
        Mock::given(method("POST"))
            .and(path(format!("/v1/enterprise/video/{}", operation)))
            .and(body_json(json!({ "key": API_KEY })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "message": operation
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let sdk = enterprise_sdk(&server);
    let video = sdk.video().base();
    assert_eq!(video.system_details().await.unwrap().message.as_deref(), Some("system_details"));
    assert_eq!(video.restart_server().await.unwrap().message.as_deref(), Some("restart_server"));
    assert_eq!(video.update().await.unwrap().message.as_deref(), Some("update"));
    assert_eq!(video.clear_cache().await.unwrap().message.as_deref(), Some("clear_cache"));
    assert_eq!(video.clear_queue().await.unwrap().message.as_deref(), Some("clear_queue"));
}

#[tokio::test]
async fn maintenance_operations_are_refused_in_standard_mode() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let sdk = sdk(&server);
    let base = sdk.interior().base();
    let results = [
        base.system_details().await,
        base.restart_server().await,
        base.update().await,
        base.clear_cache().await,
        base.clear_queue().await,
    ];
    for result in results {
        assert!(matches!(result, Err(ModelsLabError::EnterpriseOnly { .. })));
    }
}

#[tokio::test]
async fn every_domain_shares_the_mode() {
    let server = MockServer::start().await;
    let sdk = ModelsLab::with_client(common::client(&server), true).unwrap();

    let prefixes = [
        sdk.audio().base().base_url().path().to_string(),
        sdk.video().base().base_url().path().to_string(),
        sdk.community().base().base_url().path().to_string(),
        sdk.deepfake().base().base_url().path().to_string(),
        sdk.image_editing().base().base_url().path().to_string(),
        sdk.interior().base().base_url().path().to_string(),
        sdk.realtime().base().base_url().path().to_string(),
        sdk.three_d().base().base_url().path().to_string(),
    ];
    assert_eq!(
        prefixes,
        [
            "/v1/enterprise/voice/",
            "/v1/enterprise/video/",
            "/v1/enterprise/images/",
            "/v1/enterprise/deepfake/",
            "/v1/enterprise/image_editing/",
            "/v1/enterprise/interior/",
            "/v1/enterprise/realtime/",
            "/v1/enterprise/3d/",
        ]
    );
}
