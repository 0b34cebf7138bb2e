use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ModelsLabError;
use crate::validation::{ValidationError, Validator};

pub(crate) const DEFAULT_API_URL: &str = "https://modelslab.com/api/";
pub(crate) const API_KEY_ENV: &str = "MODELSLAB_API_KEY";

const DEFAULT_FETCH_RETRY: u32 = 10;
const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(2);
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for a [`ModelsLabClient`](crate::ModelsLabClient).
///
/// Every value is checked when the client is built, so an out-of-range
/// setting fails immediately instead of on the first request.
///
/// ```
/// use std::time::Duration;
/// use modelslab::ClientConfig;
///
/// let config = ClientConfig::new("my_api_key")
///     .with_fetch_retry(20)
///     .with_fetch_delay(Duration::from_secs(5));
/// assert_eq!(config.fetch_retry, 20);
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    /// The API key. When `None`, `MODELSLAB_API_KEY` is read at construction.
    pub api_key: Option<String>,
    /// Root of the API, e.g. `https://modelslab.com/api/`.
    pub base_url: String,
    /// Maximum number of fetch attempts, 1 to 100.
    pub fetch_retry: u32,
    /// Delay between fetch attempts, 1s to 300s.
    pub fetch_delay: Duration,
    /// Overall timeout of a single HTTP request, 1s to 600s.
    pub http_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_URL.to_string(),
            fetch_retry: DEFAULT_FETCH_RETRY,
            fetch_delay: DEFAULT_FETCH_DELAY,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("fetch_retry", &self.fetch_retry)
            .field("fetch_delay", &self.fetch_delay)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}

impl ClientConfig {
    /// Creates a default configuration with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_fetch_retry(mut self, fetch_retry: u32) -> Self {
        self.fetch_retry = fetch_retry;
        self
    }

    pub fn with_fetch_delay(mut self, fetch_delay: Duration) -> Self {
        self.fetch_delay = fetch_delay;
        self
    }

    pub fn with_http_timeout(mut self, http_timeout: Duration) -> Self {
        self.http_timeout = http_timeout;
        self
    }

    /// Resolves the key and checks every bound, producing the immutable settings
    /// a client is built from.
    pub(crate) fn resolve(self) -> Result<ResolvedConfig, ModelsLabError> {
        let api_key = self
            .api_key
            .filter(|k| !k.is_empty())
            .or_else(|| env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()))
            .ok_or(ModelsLabError::MissingApiKey)?;

        let mut v = Validator::new();
        v.range("fetch_retry", Some(self.fetch_retry), 1, 100);
        v.range(
            "fetch_delay",
            Some(self.fetch_delay),
            Duration::from_secs(1),
            Duration::from_secs(300),
        );
        v.range(
            "http_timeout",
            Some(self.http_timeout),
            Duration::from_secs(1),
            Duration::from_secs(600),
        );

        let base_url = match parse_base_url(&self.base_url) {
            Ok(url) => Some(url),
            Err(message) => {
                v.fail("base_url", message);
                None
            }
        };
        v.finish().map_err(ModelsLabError::InvalidConfig)?;

        let base_url = base_url.ok_or_else(|| {
            ModelsLabError::InvalidConfig(ValidationError::field("base_url", "is required"))
        })?;

        Ok(ResolvedConfig {
            api_key,
            base_url,
            fetch_retry: self.fetch_retry,
            fetch_delay: self.fetch_delay,
            http_timeout: self.http_timeout,
        })
    }
}

/// Validated settings. Only produced by [`ClientConfig::resolve`].
pub(crate) struct ResolvedConfig {
    pub(crate) api_key: String,
    pub(crate) base_url: Url,
    pub(crate) fetch_retry: u32,
    pub(crate) fetch_delay: Duration,
    pub(crate) http_timeout: Duration,
}

/// Parses the API root and guarantees a trailing slash, so `Url::join` keeps
/// the whole prefix.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("is required".to_string());
    }
    let mut url = Url::parse(raw).map_err(|e| format!("must be a valid URL: {}", e))?;
    if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
        return Err(format!("must be an http(s) URL, got {:?}", raw));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
