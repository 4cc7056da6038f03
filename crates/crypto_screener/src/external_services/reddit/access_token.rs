use serde::Deserialize;
use tracing::debug;

use crate::utils::errors::AppError;

use super::RedditService;

#[derive(Debug, Deserialize)]
pub struct AccessTokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

impl RedditService {
    pub async fn get_access_token(&self) -> Result<String, AppError> {
        debug!("Requesting Reddit application token");
        let response = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| {
                debug!("Error requesting Reddit token: {}", e);
                AppError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                service: "reddit",
                status: status.as_u16(),
            });
        }

        let token: AccessTokenResponse = response.json().await?;
        if token.access_token.is_empty() {
            return Err(AppError::InvalidPayload(
                "Reddit returned an empty access token".to_string(),
            ));
        }
        debug!(
            "Received {} token valid for {}s",
            token.token_type, token.expires_in
        );

        Ok(token.access_token)
    }
}
