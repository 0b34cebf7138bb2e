//! Wire types shared by every domain module, plus one submodule per domain.

pub mod audio;
pub mod community;
pub mod deepfake;
pub mod image_editing;
pub mod interior;
pub mod realtime;
pub mod threed;
pub mod video;

use std::fmt;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::ModelsLabError;
use crate::utils;
use crate::validation::{is_url, Validator};

/// Fields every request may carry.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct BaseRequest {
    /// A URL the API calls back once the job finishes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    /// An opaque identifier echoed back in the webhook call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_id: Option<String>,
}

impl BaseRequest {
    pub(crate) fn check(&self, v: &mut Validator) {
        v.url("webhook", self.webhook.as_deref());
    }
}

/// A file handed to the API, given as a URL, inline base64 content, or a path.
///
/// On the wire a `FileInput` is a bare JSON string. When several
/// representations are set the URL wins, then base64, then the path. With
/// none set it serializes to `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileInput {
    pub url: Option<String>,
    pub base64: Option<String>,
    pub file_path: Option<String>,
}

impl FileInput {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn from_base64(data: impl Into<String>) -> Self {
        Self {
            base64: Some(data.into()),
            ..Default::default()
        }
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..Default::default()
        }
    }

    /// Reads a local file and stores its content as base64.
    pub async fn read_base64<P: AsRef<Path>>(path: P) -> Result<Self, ModelsLabError> {
        let data = utils::file_to_base64(path).await?;
        Ok(Self::from_base64(data))
    }

    /// The representation that goes on the wire, if any.
    pub fn as_wire_str(&self) -> Option<&str> {
        self.url
            .as_deref()
            .or(self.base64.as_deref())
            .or(self.file_path.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.as_wire_str().is_none()
    }

    pub(crate) fn check(&self, field: &str, v: &mut Validator) {
        if self.is_empty() {
            v.fail(field, "is required");
        } else if let Some(url) = self.url.as_deref() {
            if !is_url(url) {
                v.fail(field, format!("must be a valid URL, got {:?}", url));
            }
        }
    }

    pub(crate) fn check_optional(input: Option<&FileInput>, field: &str, v: &mut Validator) {
        if let Some(input) = input {
            input.check(field, v);
        }
    }
}

impl Serialize for FileInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_wire_str() {
            Some(value) => serializer.serialize_str(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FileInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer) {
            Ok(None) => Ok(Self::default()),
            Ok(Some(s)) if s.is_empty() => Ok(Self::default()),
            Ok(Some(s)) if s.starts_with("http://") || s.starts_with("https://") => {
                Ok(Self::from_url(s))
            }
            Ok(Some(s)) => Ok(Self::from_base64(s)),
            Err(_) => Err(serde::de::Error::custom("invalid file input format")),
        }
    }
}

/// The raw envelope returned by every endpoint.
///
/// `status` and `message` are lifted out only when they are strings. Every
/// other key, including a non-string `status` or `message`, stays untouched
/// in `fields`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiResponse {
    pub status: Option<String>,
    pub message: Option<String>,
    pub fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for ApiResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = Map::deserialize(deserializer)?;
        let status = take_string(&mut fields, "status");
        let message = take_string(&mut fields, "message");
        Ok(Self {
            status,
            message,
            fields,
        })
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            fields.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}

impl ApiResponse {
    /// Returns `true` when the remote job reports `status == "success"`.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// A passthrough field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The job identifier to poll with, accepting numeric or string ids.
    pub fn job_id(&self) -> Option<String> {
        self.get("id").and_then(id_to_string)
    }

    /// Rebuilds the full JSON object, control fields included.
    pub fn to_value(&self) -> Value {
        let mut map = self.fields.clone();
        if let Some(status) = &self.status {
            map.insert("status".to_string(), Value::String(status.clone()));
        }
        if let Some(message) = &self.message {
            map.insert("message".to_string(), Value::String(message.clone()));
        }
        Value::Object(map)
    }

    /// Reinterprets the envelope as a domain-specific response.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, ModelsLabError> {
        Ok(serde_json::from_value(self.to_value())?)
    }
}

/// The common part of every typed response. Domain responses embed it with
/// `#[serde(flatten)]`.
///
/// Keys the domain response doesn't declare land in `extra`, so nothing the
/// API sends is lost (`output`, `fetch_result`, `eta`, `meta`, ...).
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct BaseResponse {
    #[serde(default, deserialize_with = "string_or_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BaseResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    pub fn job_id(&self) -> Option<String> {
        self.id.as_ref().and_then(id_to_string)
    }

    /// An undeclared field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

fn id_to_string(id: &Value) -> Option<String> {
    match id {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_or_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Reads a typed field, treating a value of the wrong shape as absent. A
/// 200 response must never fail to decode over one unexpected field type.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).ok())
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn file_input_precedence() {
        let all = FileInput {
            url: Some("https://example.com/a.png".into()),
            base64: Some("aGVsbG8=".into()),
            file_path: Some("/tmp/a.png".into()),
        };
        assert_eq!(serde_json::to_value(&all).unwrap(), json!("https://example.com/a.png"));

        let no_url = FileInput {
            url: None,
            ..all.clone()
        };
        assert_eq!(serde_json::to_value(&no_url).unwrap(), json!("aGVsbG8="));

        let path_only = FileInput::from_path("/tmp/a.png");
        assert_eq!(serde_json::to_value(&path_only).unwrap(), json!("/tmp/a.png"));

        assert_eq!(serde_json::to_value(FileInput::default()).unwrap(), Value::Null);
    }

    #[test]
    fn file_input_sniffing_handles_short_strings() {
        for short in ["h", "http", "https:/", "abc"] {
            let input: FileInput = serde_json::from_value(json!(short)).unwrap();
            assert_eq!(input.base64.as_deref(), Some(short));
            assert!(input.url.is_none());
        }

        let input: FileInput = serde_json::from_value(json!("http://x")).unwrap();
        assert_eq!(input.url.as_deref(), Some("http://x"));

        let input: FileInput = serde_json::from_value(json!("")).unwrap();
        assert!(input.is_empty());

        assert!(serde_json::from_value::<FileInput>(json!({"url": "x"})).is_err());
    }

    #[test]
    fn non_string_control_fields_stay_in_fields() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "status": "processing",
            "message": 42,
            "eta": 12.5,
            "id": 981,
        }))
        .unwrap();

        assert_eq!(resp.status.as_deref(), Some("processing"));
        assert!(resp.message.is_none());
        assert_eq!(resp.get("message"), Some(&json!(42)));
        assert_eq!(resp.to_value()["message"], json!(42));
        assert!(!resp.is_success());
        assert_eq!(resp.get("eta"), Some(&json!(12.5)));
        assert!(!resp.fields.contains_key("status"));
        assert_eq!(resp.job_id().as_deref(), Some("981"));
    }

    #[test]
    fn missing_status_is_not_success() {
        let resp: ApiResponse = serde_json::from_value(json!({"output": []})).unwrap();
        assert!(resp.status.is_none());
        assert!(!resp.is_success());
    }

    #[test]
    fn decode_sees_control_fields() {
        let resp: ApiResponse = serde_json::from_value(json!({
            "status": "success",
            "message": "done",
            "data": {"result": "ok"},
        }))
        .unwrap();
        let base: BaseResponse = resp.decode().unwrap();
        assert!(base.is_success());
        assert_eq!(base.message.as_deref(), Some("done"));
        assert_eq!(base.data, Some(json!({"result": "ok"})));
    }

    #[test]
    fn base_response_keeps_undeclared_keys() {
        let base: BaseResponse = serde_json::from_value(json!({
            "status": "processing",
            "id": "job-9",
            "eta": 30,
            "fetch_result": "https://modelslab.com/api/v6/images/fetch/job-9",
            "meta": {"steps": 20},
        }))
        .unwrap();

        assert_eq!(base.job_id().as_deref(), Some("job-9"));
        assert_eq!(base.get("eta"), Some(&json!(30)));
        assert_eq!(base.get("meta"), Some(&json!({"steps": 20})));
        assert!(base.get("status").is_none());
        assert!(base.get("id").is_none());
        assert_eq!(
            serde_json::to_value(&base).unwrap()["fetch_result"],
            json!("https://modelslab.com/api/v6/images/fetch/job-9")
        );
    }

    #[test]
    fn base_request_omits_unset_fields() {
        let value = serde_json::to_value(BaseRequest::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
