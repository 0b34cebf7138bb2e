use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::ModelsLabError;
use crate::types::ApiResponse;
use crate::validation::{Validate, ValidationError};

/// The body field that carries the API key. Authentication is in the JSON
/// body, not in a header.
pub(crate) const API_KEY_FIELD: &str = "key";

/// The shared HTTP client for the ModelsLab API.
///
/// It holds the pooled `reqwest::Client`, the API key, the API root and the
/// polling budget. All of it is immutable after construction, so the client is
/// cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct ModelsLabClient {
    client: reqwest::Client,
    api_key: Arc<str>,
    base_url: Url,
    fetch_retry: u32,
    fetch_delay: Duration,
}

impl fmt::Debug for ModelsLabClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelsLabClient")
            .field("base_url", &self.base_url.as_str())
            .field("fetch_retry", &self.fetch_retry)
            .field("fetch_delay", &self.fetch_delay)
            .finish_non_exhaustive()
    }
}

impl ModelsLabClient {
    /// Creates a new `ModelsLabClient` with the default configuration.
    ///
    /// It first checks the `api_key` parameter. If it's `None`, it falls back to
    /// the `MODELSLAB_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::MissingApiKey` if the API key is not provided in either way.
    /// - `ModelsLabError::Transport` if the internal HTTP client fails to build.
    pub fn new(api_key: Option<String>) -> Result<Self, ModelsLabError> {
        Self::with_config(ClientConfig {
            api_key,
            ..Default::default()
        })
    }

    /// Creates a new `ModelsLabClient` with a custom base URL.
    ///
    /// This is useful for testing or for connecting to a different API endpoint.
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::InvalidConfig` if the provided `base_url` is invalid.
    /// - `ModelsLabError::Transport` if the internal HTTP client fails to build.
    pub fn new_with_url(api_key: String, base_url: &str) -> Result<Self, ModelsLabError> {
        Self::with_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    /// Creates a new `ModelsLabClient` from a full configuration.
    ///
    /// The API key is resolved and every bound is checked here.
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::MissingApiKey` if no key is configured or found in the environment.
    /// - `ModelsLabError::InvalidConfig` if any value is out of range.
    /// - `ModelsLabError::Transport` if the internal HTTP client fails to build.
    pub fn with_config(config: ClientConfig) -> Result<Self, ModelsLabError> {
        let config = config.resolve()?;

        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            api_key: Arc::from(config.api_key),
            base_url: config.base_url,
            fetch_retry: config.fetch_retry,
            fetch_delay: config.fetch_delay,
        })
    }

    /// The configured API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The API root every domain prefix is joined onto. Always ends with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Maximum number of attempts [`fetch`](Self::fetch) makes.
    pub fn fetch_retry(&self) -> u32 {
        self.fetch_retry
    }

    /// Delay between two [`fetch`](Self::fetch) attempts.
    pub fn fetch_delay(&self) -> Duration {
        self.fetch_delay
    }

    /// Sends one authenticated POST with `payload` merged into the body.
    ///
    /// See [`post_with_cancel`](Self::post_with_cancel).
    pub async fn post<P>(&self, endpoint: Url, payload: &P) -> Result<ApiResponse, ModelsLabError>
    where
        P: Serialize + Validate + ?Sized,
    {
        self.post_with_cancel(endpoint, Some(payload), &CancellationToken::new())
            .await
    }

    /// Sends one authenticated POST whose body carries only the API key.
    pub async fn post_empty(&self, endpoint: Url) -> Result<ApiResponse, ModelsLabError> {
        self.post_with_cancel::<Map<String, Value>>(endpoint, None, &CancellationToken::new())
            .await
    }

    /// Sends exactly one authenticated POST and normalizes the result.
    ///
    /// The payload is validated first; a failing payload never reaches the
    /// network. Its fields are flattened into a JSON object and the API key is
    /// set last under `"key"`, so a payload field of the same name can't
    /// replace it. Failures are returned as-is, this layer never retries.
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::Validation` if the payload breaks a declared constraint.
    /// - `ModelsLabError::Transport` on a network failure.
    /// - `ModelsLabError::Remote` if the API answers with anything but 200.
    /// - `ModelsLabError::Decode` if the body is not a JSON object.
    /// - `ModelsLabError::Canceled` if `cancel` fires before the response is read.
    pub async fn post_with_cancel<P>(
        &self,
        endpoint: Url,
        payload: Option<&P>,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse, ModelsLabError>
    where
        P: Serialize + Validate + ?Sized,
    {
        if let Some(payload) = payload {
            payload.validate()?;
        }
        let envelope = build_envelope(&self.api_key, payload)?;

        debug!(endpoint = %endpoint, fields = envelope.len(), "dispatching request");

        let request = self.client.post(endpoint).json(&envelope);
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ModelsLabError::Canceled),
            result = exchange => result?,
        };

        if status != StatusCode::OK {
            return Err(ModelsLabError::Remote {
                status_code: status.as_u16(),
                details: body,
            });
        }

        let api_response: ApiResponse = serde_json::from_str(&body)?;
        Ok(api_response)
    }

    /// Polls `<endpoint>fetch/<id>` until the job reports success.
    ///
    /// See [`fetch_with_cancel`](Self::fetch_with_cancel).
    pub async fn fetch(&self, endpoint: &Url, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.fetch_with_cancel(endpoint, id, &CancellationToken::new())
            .await
    }

    /// Polls `<endpoint>fetch/<id>` until the job reports `status == "success"`.
    ///
    /// Any failed attempt, or any envelope without a success status, counts
    /// against the retry budget. Between attempts the client waits for the
    /// configured delay. Attempts are strictly sequential.
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::Validation` if `id` is empty or a dot segment. Nothing
    ///   is sent.
    /// - `ModelsLabError::PollExhausted` once the budget is used up. Its source
    ///   is the last error seen, or a `FetchFailed` built from the last
    ///   response's `message`.
    /// - `ModelsLabError::Canceled` if `cancel` fires before a terminal outcome,
    ///   including while a request is in flight or during the delay.
    pub async fn fetch_with_cancel(
        &self,
        endpoint: &Url,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse, ModelsLabError> {
        if id.trim().is_empty() {
            return Err(ValidationError::field("id", "is required for fetch operation").into());
        }
        if is_dot_segment(id) {
            return Err(ValidationError::field("id", "must not be a relative path segment").into());
        }
        // The id is pushed as one encoded segment so `/`, `?` and `#` stay inside it.
        let mut fetch_url = endpoint.clone();
        fetch_url
            .path_segments_mut()
            .map_err(|_| ValidationError::field("endpoint", "must be a hierarchical URL"))?
            .pop_if_empty()
            .push("fetch")
            .push(id);

        let mut last_error = None;
        for attempt in 1..=self.fetch_retry {
            if cancel.is_cancelled() {
                return Err(ModelsLabError::Canceled);
            }

            match self
                .post_with_cancel::<Map<String, Value>>(fetch_url.clone(), None, cancel)
                .await
            {
                Ok(response) if response.is_success() => {
                    info!(id, attempt, "fetch succeeded");
                    return Ok(response);
                }
                Ok(response) => {
                    debug!(
                        id,
                        attempt,
                        status = response.status.as_deref().unwrap_or("<none>"),
                        "job not ready"
                    );
                    last_error = Some(ModelsLabError::FetchFailed {
                        message: response.message.unwrap_or_default(),
                    });
                }
                Err(ModelsLabError::Canceled) => return Err(ModelsLabError::Canceled),
                Err(e) => {
                    warn!(id, attempt, error = %e, "fetch attempt failed");
                    last_error = Some(e);
                }
            }

            if attempt < self.fetch_retry {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(ModelsLabError::Canceled),
                    _ = sleep(self.fetch_delay) => {}
                }
            }
        }

        Err(ModelsLabError::PollExhausted {
            attempts: self.fetch_retry,
            source: Box::new(last_error.unwrap_or(ModelsLabError::FetchFailed {
                message: String::new(),
            })),
        })
    }
}

/// `.` and `..` (plain or percent-encoded) would be resolved away by the URL parser.
fn is_dot_segment(id: &str) -> bool {
    let decoded = id.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

/// Flattens `payload` into a JSON object and sets the API key on top of it.
fn build_envelope<P>(api_key: &str, payload: Option<&P>) -> Result<Map<String, Value>, ModelsLabError>
where
    P: Serialize + ?Sized,
{
    let mut envelope = match payload.map(serde_json::to_value).transpose()? {
        Some(Value::Object(map)) => map,
        None | Some(Value::Null) => Map::new(),
        Some(_) => {
            return Err(ValidationError::field("payload", "must serialize to a JSON object").into())
        }
    };
    envelope.insert(API_KEY_FIELD.to_string(), Value::String(api_key.to_string()));
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

    fn test_client(server: &MockServer, fetch_retry: u32, fetch_delay: Duration) -> ModelsLabClient {
        ModelsLabClient {
            client: reqwest::Client::new(),
            api_key: Arc::from("test_api_key"),
            base_url: Url::parse(&format!("{}/", server.uri())).unwrap(),
            fetch_retry,
            fetch_delay,
        }
    }

    fn voice_prefix(client: &ModelsLabClient) -> Url {
        client.base_url().join("v6/voice/").unwrap()
    }

    /// Answers "processing" for the first `pending` calls, then success.
    struct EventuallyReady {
        pending: usize,
        calls: AtomicUsize,
    }

    impl Respond for EventuallyReady {
        fn respond(&self, _request: &Request) -> ResponseTemplate {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.pending {
                ResponseTemplate::new(200).set_body_json(json!({"status": "processing"}))
            } else {
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "data": {"result": "ok"}}))
            }
        }
    }

    #[test]
    fn credential_is_set_last() {
        let mut payload = Map::new();
        payload.insert("key".into(), json!("attacker"));
        payload.insert("prompt".into(), json!("a cat"));

        let once = build_envelope("real", Some(&payload)).unwrap();
        assert_eq!(once["key"], json!("real"));
        assert_eq!(once["prompt"], json!("a cat"));

        let twice = build_envelope("real", Some(&once)).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_envelope_holds_only_the_key() {
        let envelope = build_envelope::<Map<String, Value>>("k", None).unwrap();
        assert_eq!(Value::Object(envelope), json!({"key": "k"}));
    }

    #[test]
    fn non_object_payload_is_rejected() {
        let err = build_envelope("k", Some(&vec![1, 2, 3])).unwrap_err();
        assert!(matches!(err, ModelsLabError::Validation(v) if v.has_field("payload")));
    }

    #[tokio::test]
    async fn fetch_returns_after_the_fourth_attempt() {
        let server = MockServer::start().await;
        let responder = EventuallyReady {
            pending: 3,
            calls: AtomicUsize::new(0),
        };
        Mock::given(method("POST"))
            .and(path("/v6/voice/fetch/job-1"))
            .and(body_json(json!({"key": "test_api_key"})))
            .respond_with(responder)
            .expect(4)
            .mount(&server)
            .await;

        let client = test_client(&server, 5, Duration::ZERO);
        let response = client.fetch(&voice_prefix(&client), "job-1").await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.get("data"), Some(&json!({"result": "ok"})));
        assert_eq!(server.received_requests().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn fetch_exhausts_the_budget() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v6/voice/fetch/job-2"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "processing", "message": "still rendering"})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server, 2, Duration::ZERO);
        let err = client.fetch(&voice_prefix(&client), "job-2").await.unwrap_err();

        match err {
            ModelsLabError::PollExhausted { attempts, source } => {
                assert_eq!(attempts, 2);
                assert!(
                    matches!(*source, ModelsLabError::FetchFailed { ref message } if message == "still rendering")
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_reports_the_last_transport_level_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v6/voice/fetch/job-3"))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .expect(3)
            .mount(&server)
            .await;

        let client = test_client(&server, 3, Duration::ZERO);
        let err = client.fetch(&voice_prefix(&client), "job-3").await.unwrap_err();

        match err {
            ModelsLabError::PollExhausted { source, .. } => match *source {
                ModelsLabError::Remote { status_code, ref details } => {
                    assert_eq!(status_code, 502);
                    assert_eq!(details, "bad gateway");
                }
                ref other => panic!("unexpected source: {other:?}"),
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_retries_past_a_missing_status() {
        let server = MockServer::start().await;
        // The first answer has no status at all; it must count as "not ready".
        Mock::given(method("POST"))
            .and(path("/v6/voice/fetch/job-4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"eta": 3})))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v6/voice/fetch/job-4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server, 3, Duration::ZERO);
        let response = client.fetch(&voice_prefix(&client), "job-4").await.unwrap();
        assert!(response.is_success());
    }

    #[tokio::test]
    async fn fetch_sends_nothing_when_already_canceled() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server, 3, Duration::ZERO);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = client
            .fetch_with_cancel(&voice_prefix(&client), "job-5", &cancel)
            .await
            .unwrap_err();
        assert!(err.is_canceled());
    }

    #[tokio::test]
    async fn fetch_rejects_dot_segment_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(0)
            .mount(&server)
            .await;

        let client = test_client(&server, 1, Duration::ZERO);
        for id in [".", "..", "%2E%2e"] {
            let err = client.fetch(&voice_prefix(&client), id).await.unwrap_err();
            match err {
                ModelsLabError::Validation(e) => assert!(e.has_field("id")),
                other => panic!("expected a validation error for {id:?}, got {other:?}"),
            }
        }
    }
}
