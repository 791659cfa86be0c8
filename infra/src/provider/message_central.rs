//! Message Central provider client
//!
//! Client for the Message Central verification REST API. The API wants a
//! short-lived auth token on every call; the client keeps one process-wide
//! token in a single slot and refreshes it lazily when absent or past its
//! window. Dispatch returns the token it used so the verification flow can
//! validate with the same credential even after the slot rotates.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use otp_core::errors::ProviderError;
use otp_core::services::verification::{DispatchedOtp, OtpProviderTrait, VerificationOutcome};
use otp_shared::phone::mask_phone;

/// Fixed base URL of the Message Central API
pub const MESSAGE_CENTRAL_BASE_URL: &str = "https://cpaas.messagecentral.com";

/// How long an acquired auth token is reused before a fresh acquisition
const AUTH_TOKEN_TTL: Duration = Duration::from_secs(4 * 60 * 60);

/// Request timeout for provider calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validation statuses the provider reports for a correct code
const SUCCESS_STATUSES: [&str; 2] = ["VERIFICATION_COMPLETED", "SUCCESS"];

/// Message Central configuration
#[derive(Debug, Clone)]
pub struct MessageCentralConfig {
    /// Customer identifier issued by Message Central
    pub customer_id: String,
    /// Account password; sent base64-encoded as the token endpoint `key`
    pub password: String,
}

impl MessageCentralConfig {
    /// Create configuration from environment variables
    ///
    /// Requires `MESSAGE_CENTRAL_CUSTOMER_ID` and `MESSAGE_CENTRAL_PASSWORD`.
    pub fn from_env() -> Result<Self, ProviderError> {
        let customer_id = std::env::var("MESSAGE_CENTRAL_CUSTOMER_ID").map_err(|_| {
            ProviderError::Auth("MESSAGE_CENTRAL_CUSTOMER_ID not set".to_string())
        })?;
        let password = std::env::var("MESSAGE_CENTRAL_PASSWORD")
            .map_err(|_| ProviderError::Auth("MESSAGE_CENTRAL_PASSWORD not set".to_string()))?;

        Ok(Self {
            customer_id,
            password,
        })
    }

    /// The `key` query parameter value for the token endpoint
    fn encoded_key(&self) -> String {
        BASE64.encode(self.password.as_bytes())
    }
}

struct CachedToken {
    token: String,
    fetched_at: Instant,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() < AUTH_TOKEN_TTL
    }
}

/// Message Central provider client
pub struct MessageCentralProvider {
    http: reqwest::Client,
    config: MessageCentralConfig,
    base_url: String,
    token: RwLock<Option<CachedToken>>,
}

// Wire shapes, as the provider returns them

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    data: Option<SendData>,
}

#[derive(Debug, Deserialize)]
struct SendData {
    #[serde(rename = "verificationId")]
    verification_id: String,
}

#[derive(Debug, Deserialize)]
struct ValidateResponse {
    data: Option<ValidateData>,
}

#[derive(Debug, Deserialize)]
struct ValidateData {
    #[serde(rename = "verificationStatus")]
    verification_status: String,
}

impl MessageCentralProvider {
    /// Create a new client against the production base URL
    pub fn new(config: MessageCentralConfig) -> Self {
        Self::with_base_url(config, MESSAGE_CENTRAL_BASE_URL)
    }

    /// Create a client against a custom base URL (tests)
    pub fn with_base_url(config: MessageCentralConfig, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        info!(
            customer_id = %config.customer_id,
            "Message Central provider initialized"
        );

        Self {
            http,
            config,
            base_url: base_url.into(),
            token: RwLock::new(None),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        Ok(Self::new(MessageCentralConfig::from_env()?))
    }

    /// Get a usable auth token, reusing the cached one while fresh.
    ///
    /// Double-checked under the write lock so concurrent refreshers collapse
    /// into a single acquisition call.
    async fn auth_token(&self) -> Result<String, ProviderError> {
        if let Some(cached) = self.token.read().await.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.token.clone());
            }
        }

        let mut slot = self.token.write().await;
        if let Some(cached) = slot.as_ref() {
            if cached.is_fresh() {
                return Ok(cached.token.clone());
            }
        }

        debug!("acquiring fresh Message Central auth token");
        let url = format!("{}/auth/v1/authentication/token", self.base_url);
        let key = self.config.encoded_key();
        let response = self
            .http
            .get(&url)
            .query(&[
                ("customerId", self.config.customer_id.as_str()),
                ("key", key.as_str()),
                ("scope", "NEW"),
            ])
            .header("accept", "*/*")
            .send()
            .await
            .map_err(|e| ProviderError::Auth(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "token acquisition rejected");
            return Err(ProviderError::Auth(format!(
                "token endpoint returned {status}"
            )));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Auth(format!("malformed token response: {e}")))?;

        *slot = Some(CachedToken {
            token: body.token.clone(),
            fetched_at: Instant::now(),
        });

        Ok(body.token)
    }
}

#[async_trait]
impl OtpProviderTrait for MessageCentralProvider {
    async fn dispatch_otp(
        &self,
        country_code: &str,
        phone: &str,
    ) -> Result<DispatchedOtp, ProviderError> {
        let token = self.auth_token().await?;

        let url = format!("{}/verification/v3/send", self.base_url);
        let response = self
            .http
            .post(&url)
            .query(&[
                ("countryCode", country_code),
                ("customerId", self.config.customer_id.as_str()),
                ("flowType", "SMS"),
                ("mobileNumber", phone),
            ])
            .header("authToken", &token)
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(format!("send request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                body = %body,
                phone = %mask_phone(phone),
                "OTP send rejected by provider"
            );
            return Err(ProviderError::Upstream(format!(
                "send endpoint returned {status}"
            )));
        }

        let body: SendResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(format!("malformed send response: {e}")))?;

        let verification_id = body
            .data
            .map(|d| d.verification_id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                ProviderError::Upstream("send response missing verificationId".to_string())
            })?;

        info!(
            phone = %mask_phone(phone),
            verification_id = %verification_id,
            "OTP dispatched via Message Central"
        );

        Ok(DispatchedOtp {
            verification_id,
            auth_token: token,
        })
    }

    async fn validate_otp(
        &self,
        country_code: &str,
        phone: &str,
        verification_id: &str,
        auth_token: &str,
        code: &str,
    ) -> Result<VerificationOutcome, ProviderError> {
        let url = format!("{}/verification/v3/validateOtp", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("countryCode", country_code),
                ("mobileNumber", phone),
                ("verificationId", verification_id),
                ("customerId", self.config.customer_id.as_str()),
                ("code", code),
            ])
            .header("authToken", auth_token)
            .send()
            .await
            .map_err(|e| ProviderError::Upstream(format!("validate request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                body = %body,
                phone = %mask_phone(phone),
                "OTP validation rejected by provider"
            );
            return Err(ProviderError::Upstream(format!(
                "validate endpoint returned {status}"
            )));
        }

        let body: ValidateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Upstream(format!("malformed validate response: {e}")))?;

        let status = body
            .data
            .map(|d| d.verification_status)
            .unwrap_or_default();

        debug!(
            phone = %mask_phone(phone),
            status = %status,
            "provider validation status"
        );

        if SUCCESS_STATUSES.contains(&status.as_str()) {
            Ok(VerificationOutcome::Completed)
        } else {
            Ok(VerificationOutcome::Failed)
        }
    }
}
