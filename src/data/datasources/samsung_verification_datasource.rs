use async_trait::async_trait;

use crate::{
    data::models::samsung_iap::verification_model::VerificationModel, errors::BillingError,
};

#[async_trait]
pub(crate) trait SamsungVerificationDatasource: Send + Sync {
    /// Queries the verification endpoint handed out with a completed payment
    /// (`mVerifyUrl`).
    ///
    /// Returns `None` if the endpoint answered with an empty body.
    async fn fetch_verification(
        &self,
        verify_url: &str,
    ) -> Result<Option<VerificationModel>, BillingError>;
}

pub(crate) struct SamsungVerificationDatasourceImpl {
    client: reqwest::Client,
}

#[async_trait]
impl SamsungVerificationDatasource for SamsungVerificationDatasourceImpl {
    async fn fetch_verification(
        &self,
        verify_url: &str,
    ) -> Result<Option<VerificationModel>, BillingError> {
        let response = self
            .client
            .get(verify_url)
            .send()
            .await
            .map_err(|e| {
                BillingError::SamsungVerification(format!("callout failed to send: {e}"))
            })?;

        if !response.status().is_success() {
            return Err(BillingError::SamsungVerification(format!(
                "callout returned with {} status code",
                response.status()
            )));
        }

        let body = response.text().await.map_err(|e| {
            BillingError::SamsungVerification(format!("failed to read callout response: {e}"))
        })?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&body).map(Some).map_err(|e| {
            BillingError::SamsungVerification(format!("failed to parse callout response: {e}"))
        })
    }
}

impl SamsungVerificationDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}
