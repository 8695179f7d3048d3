use thiserror::Error;

use crate::platform::remote::RemoteError;

#[derive(Debug, Error)]
pub enum BillingError {
    /// A query, purchase or consume call was made while the vendor service
    /// was not bound.
    #[error("Billing service is not connected.")]
    NotConnected,

    #[error("Failed to bind billing service '{service}': {details}")]
    Bind { service: String, details: String },

    #[error("Remote call '{function}' failed: {source}")]
    Remote {
        function: &'static str,
        #[source]
        source: RemoteError,
    },

    #[error("Failed to launch purchase flow: {0}")]
    Launch(String),

    #[error("Vendor response is missing '{0}'.")]
    MissingField(&'static str),

    #[error("Purchase verification is not available: {0}")]
    VerificationUnavailable(String),

    #[error("Invalid Google Play Developer API key: {0}")]
    GooglePlayDeveloperApiKeyInvalid(String),

    #[error("Error calling out to Google Play Developer API ({function}): {details}")]
    GooglePlayDeveloperApi {
        function: &'static str,
        details: String,
    },

    #[error("Samsung purchase verification failed: {0}")]
    SamsungVerification(String),

    #[error("Invalid billing configuration: {0}")]
    Config(String),
}

impl BillingError {
    pub(crate) fn remote(function: &'static str) -> impl FnOnce(RemoteError) -> Self {
        move |source| BillingError::Remote { function, source }
    }
}
