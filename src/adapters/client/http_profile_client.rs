//! HTTP client for the profile API.
//!
//! Implements [`ProfileService`] against the REST endpoints served by
//! [`api_router`](crate::adapters::http::api_router).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::energy::EnergyCenters;
use crate::domain::foundation::{ProfileId, SessionId};
use crate::domain::profile::SpiritualProfile;
use crate::domain::record::{ProfileRecord, SessionStats};
use crate::ports::{ClientError, CreatedProfile, ProfileService};

/// Configuration for the profile API client.
#[derive(Debug, Clone)]
pub struct HttpProfileClientConfig {
    /// Server root, without the `/api` suffix.
    pub base_url: String,
    pub timeout: Duration,
}

impl HttpProfileClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

pub struct HttpProfileClient {
    config: HttpProfileClientConfig,
    client: Client,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    session_id: Option<&'a str>,
    energy_centers: &'a EnergyCenters,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreatedBody {
    session_id: SessionId,
    profile_id: ProfileId,
    profile: SpiritualProfile,
}

#[derive(Deserialize)]
struct ListBody {
    profiles: Vec<ProfileRecord>,
}

#[derive(Deserialize)]
struct ProfileBody {
    profile: ProfileRecord,
}

#[derive(Deserialize)]
struct StatsBody {
    stats: SessionStats,
}

impl HttpProfileClient {
    pub fn new(config: HttpProfileClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(transport)?;
        read_envelope(response).await
    }
}

fn transport(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}

/// Decodes a response, turning error statuses and `success: false` into errors.
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let body: serde_json::Value = response.json().await.map_err(transport)?;

    let success = body
        .get("success")
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);
    if !status.is_success() || !success {
        let field = |name: &str| body.get(name).and_then(serde_json::Value::as_str);
        return Err(ClientError::Unsuccessful {
            code: field("code").unwrap_or(status.as_str()).to_string(),
            message: field("message").unwrap_or("request failed").to_string(),
        });
    }

    serde_json::from_value(body)
        .map_err(|e| ClientError::Transport(format!("Unexpected response body: {}", e)))
}

#[async_trait]
impl ProfileService for HttpProfileClient {
    async fn create_profile(
        &self,
        session_id: Option<&SessionId>,
        centers: &EnergyCenters,
    ) -> Result<CreatedProfile, ClientError> {
        let body = CreateBody {
            session_id: session_id.map(SessionId::as_str),
            energy_centers: centers,
        };
        let response = self
            .client
            .post(self.url("/profiles"))
            .json(&body)
            .send()
            .await
            .map_err(transport)?;

        let created: CreatedBody = read_envelope(response).await?;
        Ok(CreatedProfile {
            session_id: created.session_id,
            profile_id: created.profile_id,
            profile: created.profile,
        })
    }

    async fn list_profiles(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<ProfileRecord>, ClientError> {
        let body: ListBody = self.get(&format!("/profiles/{}", session_id)).await?;
        Ok(body.profiles)
    }

    async fn get_profile(&self, id: &ProfileId) -> Result<ProfileRecord, ClientError> {
        let body: ProfileBody = self.get(&format!("/profiles/profile/{}", id)).await?;
        Ok(body.profile)
    }

    async fn session_stats(&self, session_id: &SessionId) -> Result<SessionStats, ClientError> {
        let body: StatsBody = self
            .get(&format!("/sessions/{}/stats", session_id))
            .await?;
        Ok(body.stats)
    }
}
