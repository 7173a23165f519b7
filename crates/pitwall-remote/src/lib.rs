//! # pitwall-remote
//!
//! Remote sync collaborator: a key-value server holding team and
//! team-in-match data per username. Feature-gated by configuration presence;
//! an unconfigured client is a recoverable condition, not a crash.

mod error;

pub use error::RemoteError;

use pitwall_core::{TeamDataMap, TimDataMap};
use pitwall_config::SyncConfig;
use serde::{Deserialize, Serialize};

/// The wire format exchanged with the sync server. Settings and the match
/// schedule never travel; only observation data does.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteData {
    #[serde(rename = "teamData")]
    pub team_data: TeamDataMap,
    #[serde(rename = "timData")]
    pub tim_data: TimDataMap,
}

/// Client for the sync server.
#[derive(Debug)]
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    auth_key: String,
}

impl RemoteClient {
    /// Build a client from the sync config section.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::NotConfigured`] when the section is missing
    /// its required fields.
    pub fn from_config(config: &SyncConfig) -> Result<Self, RemoteError> {
        if !config.is_configured() {
            return Err(RemoteError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            auth_key: config.auth_key.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/profile-data", self.base_url)
    }

    /// Download the observation data stored for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or a non-success status.
    pub async fn fetch(&self, username: &str) -> Result<RemoteData, RemoteError> {
        let resp = self
            .http
            .get(self.endpoint())
            .header(reqwest::header::AUTHORIZATION, self.auth_key.as_str())
            .query(&[("username", username)])
            .send()
            .await?;
        let resp = check_response(resp).await?;
        tracing::debug!(username, "fetched remote profile data");
        Ok(resp.json().await?)
    }

    /// Upload observation data for `username`, replacing what the server
    /// holds.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError`] on transport failure or a non-success status.
    pub async fn push(&self, username: &str, data: &RemoteData) -> Result<(), RemoteError> {
        let resp = self
            .http
            .put(self.endpoint())
            .header(reqwest::header::AUTHORIZATION, self.auth_key.as_str())
            .query(&[("username", username)])
            .json(data)
            .send()
            .await?;
        check_response(resp).await?;
        tracing::debug!(username, "pushed remote profile data");
        Ok(())
    }
}

/// Check an HTTP response for common error conditions, mapping non-success
/// statuses to [`RemoteError::Api`] with the response body as the message.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, RemoteError> {
    if !resp.status().is_success() {
        return Err(RemoteError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unconfigured_sync_is_a_distinct_error() {
        let err = RemoteClient::from_config(&SyncConfig::default()).unwrap_err();
        assert!(matches!(err, RemoteError::NotConfigured));
        assert!(err.to_string().contains("sync is not configured"));
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = RemoteClient::from_config(&SyncConfig {
            base_url: "https://scout.example.org/".into(),
            auth_key: "key".into(),
        })
        .unwrap();
        assert_eq!(client.endpoint(), "https://scout.example.org/profile-data");
    }

    #[test]
    fn wire_format_uses_camel_case_keys() {
        let json = serde_json::to_value(RemoteData::default()).unwrap();
        assert!(json.get("teamData").is_some());
        assert!(json.get("timData").is_some());
    }
}
