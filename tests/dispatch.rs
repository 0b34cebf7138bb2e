mod common;

use common::{client, init_tracing, sdk, API_KEY};
use modelslab::types::audio::TextToSpeechRequest;
use modelslab::types::community::ControlNetRequest;
use modelslab::{FileInput, ModelsLabError};
use serde_json::{json, Map, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_only_the_set_fields_and_the_key() {
    init_tracing();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v6/voice/text_to_speech"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "prompt": "good morning",
            "voice_id": "madison",
            "key": API_KEY
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "id": 4217,
            "audio_url": "https://cdn.modelslab.com/audio/4217.wav",
            "eta": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = TextToSpeechRequest {
        voice_id: Some("madison".into()),
        ..TextToSpeechRequest::new("good morning")
    };
    let response = sdk(&server).audio().text_to_speech(&request).await.unwrap();

    assert!(response.base.is_success());
    assert_eq!(response.base.job_id().as_deref(), Some("4217"));
    assert_eq!(
        response.audio_url.as_deref(),
        Some("https://cdn.modelslab.com/audio/4217.wav")
    );
}

#[tokio::test]
async fn invalid_payload_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = sdk(&server)
        .audio()
        .text_to_speech(&TextToSpeechRequest::new("  "))
        .await
        .unwrap_err();

    match err {
        ModelsLabError::Validation(e) => assert_eq!(e.fields(), vec!["prompt"]),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn payload_cannot_override_the_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v6/images/text2img"))
        .and(body_json(json!({ "prompt": "x", "key": API_KEY })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let mut payload = Map::new();
    payload.insert("prompt".into(), json!("x"));
    payload.insert("key".into(), json!("someone-elses-key"));

    let endpoint = client.base_url().join("v6/images/text2img").unwrap();
    let response = client.post(endpoint, &payload).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn wire_names_follow_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v6/images/controlnet"))
        .and(body_json(json!({
            "prompt": "a red barn",
            "init_image": "https://example.com/barn.png",
            "controlnet_model": "canny",
            "track_id": "barn-1",
            "key": API_KEY
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "processing",
            "id": "barn-1-job",
            "message": "queued"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = ControlNetRequest::new("a red barn");
    request.init_image = Some(FileInput::from_url("https://example.com/barn.png"));
    request.control_net_model = Some("canny".into());
    request.base.track_id = Some("barn-1".into());

    let response = sdk(&server).community().controlnet(&request).await.unwrap();
    assert!(!response.base.is_success());
    assert_eq!(response.base.message.as_deref(), Some("queued"));
    assert_eq!(response.base.job_id().as_deref(), Some("barn-1-job"));
}

#[tokio::test]
async fn non_200_is_a_remote_error_with_the_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v6/voice/text_to_speech"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let err = sdk(&server)
        .audio()
        .text_to_speech(&TextToSpeechRequest::new("hi"))
        .await
        .unwrap_err();

    match err {
        ModelsLabError::Remote {
            status_code,
            details,
        } => {
            assert_eq!(status_code, 500);
            assert_eq!(details, "internal error");
        }
        other => panic!("expected a remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn other_2xx_statuses_are_not_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({ "status": "success" })))
        .mount(&server)
        .await;

    let err = sdk(&server)
        .audio()
        .text_to_speech(&TextToSpeechRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelsLabError::Remote { status_code: 202, .. }));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = sdk(&server)
        .audio()
        .text_to_speech(&TextToSpeechRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelsLabError::Decode(_)));
}

#[tokio::test]
async fn error_status_is_passed_through_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "error",
            "message": "insufficient credits",
            "tip": "top up your wallet"
        })))
        .mount(&server)
        .await;

    let client = client(&server);
    let response = client
        .post_empty(client.base_url().join("v6/voice/fetch/1").unwrap())
        .await
        .unwrap();

    assert_eq!(response.status.as_deref(), Some("error"));
    assert_eq!(response.message.as_deref(), Some("insufficient credits"));
    assert_eq!(response.get("tip"), Some(&Value::from("top up your wallet")));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let server = MockServer::start().await;
    let client = client(&server);
    let endpoint = client.base_url().join("v6/voice/text_to_speech").unwrap();
    drop(server);

    let err = client
        .post(endpoint, &TextToSpeechRequest::new("hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, ModelsLabError::Transport(_)));
}
