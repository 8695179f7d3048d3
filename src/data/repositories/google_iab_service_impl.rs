use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::{
    config::BillingConfig,
    constants::GOOGLE_REQUEST_PURCHASE,
    data::{
        datasources::google_play_developer_api_datasource::{
            GooglePlayDeveloperApiDatasource, GooglePlayDeveloperApiDatasourceImpl,
        },
        models::google_play_developer_api::{
            product_purchase_model as gp, subscription_purchase_v2_model as gs,
        },
    },
    domain::{
        entities::{
            order::{Order, OrderDetails},
            product_type::PurchaseType,
            purchasable::Purchasable,
            query_result::{PurchaseResult, QueryResult},
            response_code::{GoogleResponseCode, VendorResponse},
            verification::VerificationOutcome,
        },
        repositories::iab_service::IabService,
    },
    errors::BillingError,
    platform::{
        connection::ConnectionWatcher,
        host::{HostActivity, ServiceConnector},
        intent::{ActivityResult, Intent},
        remote::InAppBillingService,
    },
};

use super::billing_manager::BillingManager;

/// [`IabService`] backed by Google Play.
///
/// Product group IDs are ignored. Purchases are verified with the Google Play
/// Developer API when a service-account key is configured.
pub struct GoogleIabService {
    billing_manager: BillingManager,
    google_play_api_key: Option<String>,
    developer_api: OnceCell<Arc<dyn GooglePlayDeveloperApiDatasource>>,
}

#[async_trait]
impl IabService for GoogleIabService {
    async fn connect(&self) -> Result<(), BillingError> {
        self.billing_manager.connect().await
    }

    async fn disconnect(&self) {
        self.billing_manager.disconnect().await
    }

    fn is_connected(&self) -> bool {
        self.billing_manager.is_connected()
    }

    async fn query_purchasable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.billing_manager
            .query_purchasable_products(product_ids)
            .await
    }

    async fn query_subscribable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.billing_manager
            .query_purchasable_subscriptions(product_ids)
            .await
    }

    async fn query_purchased_products(
        &self,
        _product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.billing_manager.query_purchased_products().await
    }

    async fn query_subscribed_products(
        &self,
        _product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.billing_manager.query_purchased_subscriptions().await
    }

    async fn purchase_product(
        &self,
        _product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        Ok(self
            .billing_manager
            .purchase(GOOGLE_REQUEST_PURCHASE, product_id, None)
            .await?
            .into())
    }

    async fn subscribe_product(
        &self,
        _product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        Ok(self
            .billing_manager
            .subscribe(GOOGLE_REQUEST_PURCHASE, product_id, None)
            .await?
            .into())
    }

    fn on_activity_result(
        &self,
        request_code: i32,
        result_code: ActivityResult,
        data: Option<&Intent>,
    ) -> Option<PurchaseResult<Order>> {
        self.billing_manager
            .on_activity_result(request_code, result_code, data)
    }

    async fn verify_purchase(&self, order: &Order) -> Result<VerificationOutcome, BillingError> {
        let OrderDetails::Google {
            package_name,
            product_type,
            purchase_token,
            ..
        } = &order.details
        else {
            return Err(BillingError::VerificationUnavailable(format!(
                "order '{}' was not placed through Google Play",
                order.order_id
            )));
        };
        if purchase_token.is_empty() || order.product_id.is_empty() {
            return Ok(VerificationOutcome::Skipped);
        }

        let developer_api = self.developer_api().await?;
        match product_type {
            PurchaseType::InApp => {
                let purchase = developer_api
                    .get_product_purchase(package_name, &order.product_id, purchase_token)
                    .await?;
                Ok(match purchase.purchase_state {
                    gp::PurchaseState::Purchased => VerificationOutcome::Valid,
                    state => VerificationOutcome::Invalid {
                        reason: format!("purchase state is {state:?}"),
                    },
                })
            }
            PurchaseType::Subscription => {
                let subscription = developer_api
                    .get_subscription_purchase_v2(package_name, purchase_token)
                    .await?;
                Ok(match subscription.subscription_state {
                    gs::SubscriptionState::SubscriptionStateActive
                    | gs::SubscriptionState::SubscriptionStateInGracePeriod => {
                        VerificationOutcome::Valid
                    }
                    state => VerificationOutcome::Invalid {
                        reason: format!("subscription state is {state:?}"),
                    },
                })
            }
        }
    }
}

impl GoogleIabService {
    pub fn new(
        host: Arc<dyn HostActivity>,
        connector: Arc<dyn ServiceConnector<dyn InAppBillingService>>,
        config: &BillingConfig,
    ) -> Self {
        Self {
            billing_manager: BillingManager::new(host, connector, config),
            google_play_api_key: config.google_play_api_key.clone(),
            developer_api: OnceCell::new(),
        }
    }

    /// Consumes a purchased product so that it can be bought again.
    pub async fn consume_product(
        &self,
        purchase_token: &str,
    ) -> Result<GoogleResponseCode, BillingError> {
        self.billing_manager.consume(purchase_token).await
    }

    /// To be called when the platform reports that the billing service went
    /// away.
    pub fn on_service_disconnected(&self) {
        self.billing_manager.on_service_disconnected()
    }

    pub fn watch_connection(&self) -> ConnectionWatcher<dyn InAppBillingService> {
        self.billing_manager.watch_connection()
    }

    pub fn package_name(&self) -> &str {
        self.billing_manager.package_name()
    }

    pub fn billing_manager(&self) -> &BillingManager {
        &self.billing_manager
    }

    #[cfg(test)]
    pub(crate) fn with_developer_api(
        mut self,
        developer_api: Arc<dyn GooglePlayDeveloperApiDatasource>,
    ) -> Self {
        self.developer_api = OnceCell::from(developer_api);
        self
    }

    /// The Developer API client is built on the first verification. A client
    /// that fails to build is not kept, so the next verification retries.
    async fn developer_api(
        &self,
    ) -> Result<Arc<dyn GooglePlayDeveloperApiDatasource>, BillingError> {
        if let Some(developer_api) = self.developer_api.get() {
            return Ok(developer_api.clone());
        }
        let api_key = self.google_play_api_key.as_deref().ok_or_else(|| {
            BillingError::VerificationUnavailable(
                "no Google Play service account key is configured".to_string(),
            )
        })?;
        self.developer_api
            .get_or_try_init(|| async {
                let developer_api: Arc<dyn GooglePlayDeveloperApiDatasource> =
                    Arc::new(GooglePlayDeveloperApiDatasourceImpl::new(api_key).await?);
                Ok::<_, BillingError>(developer_api)
            })
            .await
            .cloned()
    }
}
