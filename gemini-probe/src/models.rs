//! Models API surface.

mod http;

use std::sync::Arc;

use gemini_probe_types::{
    GenerationRequest, GenerationResponse, ListModelsConfig, ListModelsResponse, ModelDescriptor,
};
use reqwest::header::CONTENT_TYPE;
use reqwest::Url;
use tracing::{debug, warn};

use crate::client::ClientInner;
use crate::error::{Error, Result};
use crate::http_response::generation_response;

use self::http::{build_model_method_url, build_models_list_url};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（单次请求）。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（带分页配置，单次请求）。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "list models rejected");
            return Err(Error::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        let result = serde_json::from_str::<ListModelsResponse>(&body)?;
        debug!(count = result.models.len(), "models listed");
        Ok(result)
    }

    /// 列出所有模型（自动翻页）。
    pub async fn all(&self) -> Result<Vec<ModelDescriptor>> {
        self.all_with_config(ListModelsConfig::default()).await
    }

    /// 列出所有模型（带配置，自动翻页）。
    pub async fn all_with_config(
        &self,
        mut config: ListModelsConfig,
    ) -> Result<Vec<ModelDescriptor>> {
        let mut models = Vec::new();
        loop {
            let response = self.list_with_config(config.clone()).await?;
            let next = response.next_page().map(ToString::to_string);
            models.extend(response.models);
            match next {
                Some(token) if config.page_token.as_deref() == Some(token.as_str()) => {
                    warn!("nextPageToken repeated, stop paging");
                    break;
                }
                Some(token) => config.page_token = Some(token),
                None => break,
            }
        }
        Ok(models)
    }

    /// `generateContent` 的请求地址（不含凭据）。
    ///
    /// # Errors
    /// 当模型名无法组成合法 URL 时返回错误。
    pub fn generate_content_url(&self, model: &str) -> Result<Url> {
        build_model_method_url(&self.inner, model, "generateContent")
    }

    /// 生成内容，原样返回状态码与响应体。
    ///
    /// 非 2xx 状态返回 [`Error::ApiError`]，其中保留原始响应体。
    pub async fn generate_content(
        &self,
        model: impl AsRef<str>,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse> {
        let model = model.as_ref();
        let url = self.generate_content_url(model)?;
        let body = serde_json::to_vec(request)?;
        let request = self
            .inner
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        let response = self.inner.send(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        if !status.is_success() {
            warn!(model, status = status.as_u16(), "generate content rejected");
            return Err(Error::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(generation_response(status.as_u16(), &headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_support::test_client_inner_with_base;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn models_for(server: &MockServer) -> Models {
        Models::new(Arc::new(test_client_inner_with_base(&server.uri(), "v1beta")))
    }

    #[tokio::test]
    async fn list_sends_key_as_query_param() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/gemini-pro", "supportedGenerationMethods": ["generateContent"]}]
            })))
            .mount(&server)
            .await;

        let response = models_for(&server).list().await.unwrap();
        assert_eq!(response.models.len(), 1);
        assert_eq!(response.models[0].name, "models/gemini-pro");
    }

    #[tokio::test]
    async fn list_malformed_body_is_data_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = models_for(&server).list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataShape);
    }

    #[tokio::test]
    async fn list_entry_without_name_is_data_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"supportedGenerationMethods": ["generateContent"]}]
            })))
            .mount(&server)
            .await;

        let err = models_for(&server).list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DataShape);
    }

    #[tokio::test]
    async fn all_follows_page_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(query_param("pageToken", "p2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/b"}],
                "nextPageToken": ""
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/a"}],
                "nextPageToken": "p2"
            })))
            .mount(&server)
            .await;

        let names: Vec<String> = models_for(&server)
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["models/a", "models/b"]);
    }

    #[tokio::test]
    async fn all_stops_on_repeated_page_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .and(query_param("pageToken", "same"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/b"}],
                "nextPageToken": "same"
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1beta/models"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "models": [{"name": "models/a"}],
                "nextPageToken": "same"
            })))
            .mount(&server)
            .await;

        let names: Vec<String> = models_for(&server)
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["models/a", "models/b"]);
    }

    #[tokio::test]
    async fn generate_content_posts_wire_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-flash-latest:generateContent"))
            .and(query_param("key", "test-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"contents": [{"parts": [{"text": "ping"}]}]})))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("x-test", "1")
                    .set_body_string("{\"candidates\": []}"),
            )
            .mount(&server)
            .await;

        let response = models_for(&server)
            .generate_content("gemini-flash-latest", &GenerationRequest::single_prompt("ping"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body, "{\"candidates\": []}");
        assert_eq!(response.header("x-test"), Some("1"));
    }

    #[tokio::test]
    async fn generate_content_rejection_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-flash-latest:generateContent"))
            .respond_with(ResponseTemplate::new(403).set_body_string("{\"error\":\"invalid key\"}"))
            .mount(&server)
            .await;

        let err = models_for(&server)
            .generate_content("models/gemini-flash-latest", &GenerationRequest::single_prompt("x"))
            .await
            .unwrap_err();
        match err {
            Error::ApiError { status, body } => {
                assert_eq!(status, 403);
                assert_eq!(body, "{\"error\":\"invalid key\"}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let inner = test_client_inner_with_base("http://127.0.0.1:9", "v1beta");
        let models = Models::new(Arc::new(inner));
        let err = models.list().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
