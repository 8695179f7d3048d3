use async_trait::async_trait;
use serde::de::DeserializeOwned;
use yup_oauth2::{
    authenticator::DefaultAuthenticator, parse_service_account_key, ServiceAccountAuthenticator,
};

use crate::{
    constants::GOOGLE_PLAY_DEVELOPER_API_SCOPE,
    data::models::google_play_developer_api::{
        product_purchase_model::ProductPurchaseModel,
        subscription_purchase_v2_model::SubscriptionPurchaseV2Model,
    },
    errors::BillingError,
};

#[async_trait]
pub(crate) trait GooglePlayDeveloperApiDatasource: Send + Sync {
    /// purchases.products.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products/get
    ///
    /// package_name:
    ///   The package name of the application the inapp product was sold in.
    /// product_id:
    ///   The inapp product SKU.
    /// token:
    ///   The token provided to the user's device when the inapp product was
    ///   purchased.
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<ProductPurchaseModel, BillingError>;

    /// purchases.subscriptionsv2.get:
    /// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptionsv2/get
    async fn get_subscription_purchase_v2(
        &self,
        package_name: &str,
        token: &str,
    ) -> Result<SubscriptionPurchaseV2Model, BillingError>;
}

/// Holds the service-account authenticator rather than a token. The
/// authenticator caches the access token and refreshes it once it expires.
pub(crate) struct GooglePlayDeveloperApiDatasourceImpl {
    authenticator: DefaultAuthenticator,
    client: reqwest::Client,
}

#[async_trait]
impl GooglePlayDeveloperApiDatasource for GooglePlayDeveloperApiDatasourceImpl {
    async fn get_product_purchase(
        &self,
        package_name: &str,
        product_id: &str,
        token: &str,
    ) -> Result<ProductPurchaseModel, BillingError> {
        let url = format!("https://androidpublisher.googleapis.com/androidpublisher/v3/applications/{package_name}/purchases/products/{product_id}/tokens/{token}");
        self.callout(&url, "purchases.products.get").await
    }

    async fn get_subscription_purchase_v2(
        &self,
        package_name: &str,
        token: &str,
    ) -> Result<SubscriptionPurchaseV2Model, BillingError> {
        let url = format!("https://androidpublisher.googleapis.com/androidpublisher/v3/applications/{package_name}/purchases/subscriptionsv2/tokens/{token}");
        self.callout(&url, "purchases.subscriptionsv2.get").await
    }
}

impl GooglePlayDeveloperApiDatasourceImpl {
    pub(crate) async fn new(api_key: &str) -> Result<Self, BillingError> {
        let key = parse_service_account_key(api_key).map_err(|e| {
            BillingError::GooglePlayDeveloperApiKeyInvalid(format!(
                "service account key could not be parsed: {e}"
            ))
        })?;
        let authenticator = ServiceAccountAuthenticator::builder(key)
            .build()
            .await
            .map_err(|e| {
                BillingError::GooglePlayDeveloperApiKeyInvalid(format!(
                    "service account authenticator could not be built: {e}"
                ))
            })?;
        let datasource = Self {
            authenticator,
            client: reqwest::Client::new(),
        };
        // Surfaces a bad key at construction.
        datasource.access_token().await?;
        Ok(datasource)
    }

    async fn access_token(&self) -> Result<String, BillingError> {
        Ok(self
            .authenticator
            .token(&[GOOGLE_PLAY_DEVELOPER_API_SCOPE])
            .await
            .map_err(|e| {
                BillingError::GooglePlayDeveloperApiKeyInvalid(format!(
                    "service account token could not be built: {e}"
                ))
            })?
            .token()
            .ok_or_else(|| {
                BillingError::GooglePlayDeveloperApiKeyInvalid(
                    "service account token is empty".to_string(),
                )
            })?
            .to_string())
    }

    async fn callout<T: DeserializeOwned>(
        &self,
        url: &str,
        function: &'static str,
    ) -> Result<T, BillingError> {
        let access_token = self.access_token().await?;
        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| BillingError::GooglePlayDeveloperApi {
                function,
                details: format!("callout failed to send: {e}"),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(BillingError::GooglePlayDeveloperApi {
                function,
                details: format!(
                    "callout returned with {status} status code: {}",
                    response.text().await.unwrap_or_default()
                ),
            });
        }

        response
            .json()
            .await
            .map_err(|e| BillingError::GooglePlayDeveloperApi {
                function,
                details: format!("failed to parse callout response: {e}"),
            })
    }
}
