use crate::{configuration::Settings, error::ApiError};
use axum::body::Bytes;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    settings: Arc<Settings>,
    http: reqwest::Client,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.fetch.timeout_secs))
            .build()?;

        Ok(Self {
            settings: Arc::new(settings),
            http,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Base URL used when the service links back to itself.
    pub fn public_url(&self) -> &str {
        &self.settings.application.public_url
    }

    /// Fetches a caller-supplied image URL, refusing responses without a
    /// content length or above the configured ceiling.
    pub async fn fetch_image_bytes(&self, url: &str) -> Result<Bytes, ApiError> {
        let response = self.http.get(url).send().await?;

        match response.content_length() {
            None => {
                return Err(ApiError::Fetch(
                    "Couldn't retrieve the content length of the requested URL.".to_owned(),
                ))
            }
            Some(length) if length > self.settings.fetch.max_content_length => {
                return Err(ApiError::Fetch(format!(
                    "The requested content cannot exceed {} bytes.",
                    self.settings.fetch.max_content_length
                )))
            }
            Some(_) => {}
        }

        Ok(response.bytes().await?)
    }
}
