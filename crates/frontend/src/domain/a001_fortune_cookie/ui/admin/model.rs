use async_trait::async_trait;
use contracts::domain::a001_fortune_cookie::{
    CreateFortuneRequest, FortuneListResponse, FortunePhrase,
};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::{collection_url, item_url};
use crate::shared::config::ServiceConfig;

#[derive(Debug, Error)]
pub enum FortuneApiError {
    #[error("failed to send request: {0}")]
    Network(String),
    #[error("unexpected response status {status}")]
    Status { status: u16 },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

/// Remote fortune collection
#[async_trait(?Send)]
pub trait FortuneApi {
    async fn list_phrases(&self) -> Result<Vec<FortunePhrase>, FortuneApiError>;
    async fn create_phrase(&self, phrase: &str) -> Result<(), FortuneApiError>;
    async fn delete_phrase(&self, id: &str) -> Result<(), FortuneApiError>;
}

/// `FortuneApi` over HTTP
#[derive(Debug, Clone)]
pub struct HttpFortuneApi {
    collection: String,
}

impl HttpFortuneApi {
    pub fn new(service: &ServiceConfig) -> Self {
        Self {
            collection: collection_url(service),
        }
    }
}

fn ensure_ok(response: Response) -> Result<Response, FortuneApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(FortuneApiError::Status {
            status: response.status(),
        })
    }
}

#[async_trait(?Send)]
impl FortuneApi for HttpFortuneApi {
    async fn list_phrases(&self) -> Result<Vec<FortunePhrase>, FortuneApiError> {
        let response = Request::get(&self.collection)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FortuneApiError::Network(e.to_string()))?;

        let body: FortuneListResponse = ensure_ok(response)?
            .json()
            .await
            .map_err(|e| FortuneApiError::Decode(e.to_string()))?;

        Ok(body.into_phrases())
    }

    async fn create_phrase(&self, phrase: &str) -> Result<(), FortuneApiError> {
        let response = Request::post(&self.collection)
            .json(&CreateFortuneRequest::new(phrase))
            .map_err(|e| FortuneApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| FortuneApiError::Network(e.to_string()))?;

        ensure_ok(response).map(|_| ())
    }

    async fn delete_phrase(&self, id: &str) -> Result<(), FortuneApiError> {
        let response = Request::delete(&item_url(&self.collection, id))
            .send()
            .await
            .map_err(|e| FortuneApiError::Network(e.to_string()))?;

        ensure_ok(response).map(|_| ())
    }
}
