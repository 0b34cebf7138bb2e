use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::client::ModelsLabClient;
use crate::error::ModelsLabError;
use crate::types::ApiResponse;
use crate::validation::Validate;

/// Endpoint prefix and shared client for one domain of the API.
///
/// Standard mode resolves every operation under `v6/<domain>/`, enterprise
/// mode under `v1/enterprise/<domain>/`. The prefix is computed once here and
/// never changes afterwards.
#[derive(Clone, Debug)]
pub struct BaseApi {
    client: ModelsLabClient,
    enterprise: bool,
    base_url: Url,
}

impl BaseApi {
    /// Builds the prefix for the domain identified by `path` (e.g. `voice`).
    ///
    /// # Errors
    ///
    /// - `ModelsLabError::UrlParseFailed` if the prefix can't be joined onto the API root.
    pub fn new(client: ModelsLabClient, enterprise: bool, path: &str) -> Result<Self, ModelsLabError> {
        let prefix = if enterprise {
            format!("v1/enterprise/{}/", path)
        } else {
            format!("v6/{}/", path)
        };
        let base_url = client.base_url().join(&prefix)?;
        Ok(Self {
            client,
            enterprise,
            base_url,
        })
    }

    /// The domain prefix, e.g. `https://modelslab.com/api/v6/voice/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn client(&self) -> &ModelsLabClient {
        &self.client
    }

    pub fn is_enterprise(&self) -> bool {
        self.enterprise
    }

    /// Resolves `operation` against the domain prefix.
    pub fn endpoint(&self, operation: &str) -> Result<Url, ModelsLabError> {
        Ok(self.base_url.join(operation)?)
    }

    /// Validates `request`, posts it to `operation` once and decodes the envelope into `T`.
    pub(crate) async fn call<P, T>(&self, operation: &str, request: &P) -> Result<T, ModelsLabError>
    where
        P: Serialize + Validate,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.endpoint(operation)?, request).await?;
        response.decode()
    }

    /// Polls `<prefix>fetch/<id>` until the job succeeds.
    ///
    /// See [`ModelsLabClient::fetch_with_cancel`] for the retry rules.
    pub async fn fetch(&self, id: &str) -> Result<ApiResponse, ModelsLabError> {
        self.client.fetch(&self.base_url, id).await
    }

    pub async fn fetch_with_cancel(
        &self,
        id: &str,
        cancel: &CancellationToken,
    ) -> Result<ApiResponse, ModelsLabError> {
        self.client.fetch_with_cancel(&self.base_url, id, cancel).await
    }

    /// Reports the health and hardware of a dedicated enterprise server.
    pub async fn system_details(&self) -> Result<ApiResponse, ModelsLabError> {
        self.enterprise_call("system_details").await
    }

    pub async fn restart_server(&self) -> Result<ApiResponse, ModelsLabError> {
        self.enterprise_call("restart_server").await
    }

    pub async fn update(&self) -> Result<ApiResponse, ModelsLabError> {
        self.enterprise_call("update").await
    }

    pub async fn clear_cache(&self) -> Result<ApiResponse, ModelsLabError> {
        self.enterprise_call("clear_cache").await
    }

    pub async fn clear_queue(&self) -> Result<ApiResponse, ModelsLabError> {
        self.enterprise_call("clear_queue").await
    }

    async fn enterprise_call(&self, operation: &'static str) -> Result<ApiResponse, ModelsLabError> {
        if !self.enterprise {
            return Err(ModelsLabError::EnterpriseOnly { operation });
        }
        self.client.post_empty(self.endpoint(operation)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ModelsLabClient {
        ModelsLabClient::new_with_url("test_api_key".to_string(), "https://modelslab.com/api").unwrap()
    }

    #[test]
    fn standard_prefix() {
        let api = BaseApi::new(client(), false, "voice").unwrap();
        assert_eq!(api.base_url().as_str(), "https://modelslab.com/api/v6/voice/");
        assert_eq!(
            api.endpoint("text_to_speech").unwrap().as_str(),
            "https://modelslab.com/api/v6/voice/text_to_speech"
        );
    }

    #[test]
    fn enterprise_prefix() {
        let api = BaseApi::new(client(), true, "3d").unwrap();
        assert!(api.is_enterprise());
        assert_eq!(
            api.base_url().as_str(),
            "https://modelslab.com/api/v1/enterprise/3d/"
        );
    }

    #[tokio::test]
    async fn maintenance_requires_enterprise_mode() {
        let api = BaseApi::new(client(), false, "video").unwrap();
        let err = api.clear_queue().await.unwrap_err();
        assert!(matches!(
            err,
            ModelsLabError::EnterpriseOnly {
                operation: "clear_queue"
            }
        ));
    }
}
