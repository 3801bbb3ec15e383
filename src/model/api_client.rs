//! Picto Lingua backend API client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::types::{
    Image, SaveSessionRequest, SaveSessionResponse, SessionData, Theme, VocabularyItem,
};
use crate::config::Config;
use crate::{log_api_request, log_api_result};

/// Errors from talking to the backend
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Operations the app needs from the backend
#[async_trait]
pub trait VocabularyApi: Send + Sync {
    async fn fetch_themes(&self) -> ApiResult<Vec<Theme>>;

    async fn fetch_images(&self, theme_id: &str) -> ApiResult<Vec<Image>>;

    async fn fetch_vocabulary(&self, theme_id: &str, count: u32) -> ApiResult<Vec<VocabularyItem>>;

    async fn save_session(&self, request: &SaveSessionRequest) -> ApiResult<SaveSessionResponse>;

    /// `None` when the backend does not know the session
    async fn load_session(&self, session_id: &str) -> ApiResult<Option<SessionData>>;
}

#[derive(Deserialize)]
struct ThemesEnvelope {
    #[serde(default)]
    themes: Vec<Theme>,
}

#[derive(Deserialize)]
struct ImagesEnvelope {
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct VocabularyEnvelope {
    #[serde(default)]
    vocabulary: Vec<VocabularyItem>,
}

/// HTTP client for the backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    language: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            language: config.language.clone(),
        })
    }

    /// Client against an arbitrary base URL with default settings
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            language: crate::config::DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(query).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: Self::error_message(&body),
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    /// The backend wraps failures as `{"error": "..."}`
    fn error_message(body: &str) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            error: String,
        }

        serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| body.trim().to_string())
    }
}

#[async_trait]
impl VocabularyApi for ApiClient {
    async fn fetch_themes(&self) -> ApiResult<Vec<Theme>> {
        log_api_request!("fetch_themes", base_url = %self.base_url);
        let result = self
            .get_json::<ThemesEnvelope>("/themes", &[])
            .await
            .map(|e| e.themes);
        log_api_result!("fetch_themes", result);
        result
    }

    async fn fetch_images(&self, theme_id: &str) -> ApiResult<Vec<Image>> {
        log_api_request!("fetch_images", theme_id);
        let result = self
            .get_json::<ImagesEnvelope>("/images", &[("theme", theme_id.to_string())])
            .await
            .map(|e| e.images);
        log_api_result!("fetch_images", result);
        result
    }

    async fn fetch_vocabulary(&self, theme_id: &str, count: u32) -> ApiResult<Vec<VocabularyItem>> {
        log_api_request!("fetch_vocabulary", theme_id, count, language = %self.language);
        let query = [
            ("theme", theme_id.to_string()),
            ("count", count.to_string()),
            ("language", self.language.clone()),
        ];
        let result = self
            .get_json::<VocabularyEnvelope>("/vocabulary", &query)
            .await
            .map(|e| e.vocabulary);
        log_api_result!("fetch_vocabulary", result);
        result
    }

    async fn save_session(&self, request: &SaveSessionRequest) -> ApiResult<SaveSessionResponse> {
        log_api_request!(
            "save_session",
            theme_id = %request.theme_id,
            words = request.progress.len()
        );
        let url = format!("{}/session", self.base_url);
        let result = match self.client.post(&url).json(request).send().await {
            Ok(response) => Self::decode(response).await,
            Err(e) => Err(e.into()),
        };
        log_api_result!("save_session", result);
        result
    }

    async fn load_session(&self, session_id: &str) -> ApiResult<Option<SessionData>> {
        log_api_request!("load_session", session_id);
        let result = match self
            .get_json::<SessionData>("/session", &[("session_id", session_id.to_string())])
            .await
        {
            Ok(session) => Ok(Some(session)),
            Err(ApiError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                Ok(None)
            }
            Err(e) => Err(e),
        };
        log_api_result!("load_session", result);
        result
    }
}
