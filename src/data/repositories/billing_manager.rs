use std::{
    collections::HashSet,
    sync::{Arc, Mutex, PoisonError},
};

use tracing::warn;

use crate::{
    config::BillingConfig,
    constants::{GOOGLE_INAPP_PURCHASE_DATA, GOOGLE_RESPONSE_CODE},
    data::{
        datasources::google_play_billing_datasource::{
            GooglePlayBillingDatasource, GooglePlayBillingDatasourceImpl,
        },
        models::google_play_billing::{
            purchase_data_model::PurchaseDataModel, sku_details_model::SkuDetailsModel,
        },
    },
    domain::entities::{
        order::{Order, OrderDetails, PurchaseState},
        product_type::PurchaseType,
        purchasable::{Purchasable, PurchasableDetails},
        query_result::{PurchaseResult, QueryResult},
        response_code::GoogleResponseCode,
    },
    errors::BillingError,
    platform::{
        connection::ConnectionWatcher,
        host::{HostActivity, ServiceConnector},
        intent::{ActivityResult, Intent},
        remote::InAppBillingService,
    },
};

/// Sends in-app billing requests to Google Play and decodes their results.
///
/// Every query, purchase and consume call fails with
/// [`BillingError::NotConnected`] until [`BillingManager::connect`] has
/// succeeded. The calls wait on the billing service and should not be made
/// from the host's UI thread.
pub struct BillingManager {
    host: Arc<dyn HostActivity>,
    datasource: GooglePlayBillingDatasourceImpl,
    pending_request: Mutex<Option<(i32, PurchaseType)>>,
}

impl BillingManager {
    pub fn new(
        host: Arc<dyn HostActivity>,
        connector: Arc<dyn ServiceConnector<dyn InAppBillingService>>,
        config: &BillingConfig,
    ) -> Self {
        let package_name = host.package_name().to_string();
        Self {
            host,
            datasource: GooglePlayBillingDatasourceImpl::new(
                connector,
                package_name,
                config.api_version,
            ),
            pending_request: Mutex::new(None),
        }
    }

    /// Binds the Google Play billing service.
    pub async fn connect(&self) -> Result<(), BillingError> {
        self.datasource.connect().await
    }

    /// Unbinds the billing service, if bound.
    pub async fn disconnect(&self) {
        self.datasource.disconnect().await
    }

    /// To be called when the platform reports that the billing service went
    /// away.
    pub fn on_service_disconnected(&self) {
        self.datasource.on_service_disconnected()
    }

    pub fn is_connected(&self) -> bool {
        self.datasource.is_connected()
    }

    pub fn watch_connection(&self) -> ConnectionWatcher<dyn InAppBillingService> {
        self.datasource.watch()
    }

    pub async fn query_purchasable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.query_purchasables(PurchaseType::InApp, product_ids)
            .await
    }

    pub async fn query_purchasable_subscriptions(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.query_purchasables(PurchaseType::Subscription, product_ids)
            .await
    }

    /// Returns the products currently owned by the user.
    pub async fn query_purchased_products(&self) -> Result<QueryResult<Order>, BillingError> {
        self.query_purchased(PurchaseType::InApp).await
    }

    /// Returns the subscriptions currently owned by the user.
    pub async fn query_purchased_subscriptions(&self) -> Result<QueryResult<Order>, BillingError> {
        self.query_purchased(PurchaseType::Subscription).await
    }

    /// Launches the purchase flow for a product. The outcome is delivered to
    /// the host's activity-result callback, which should be forwarded to
    /// [`BillingManager::on_activity_result`].
    pub async fn purchase(
        &self,
        request_code: i32,
        product_id: &str,
        developer_payload: Option<&str>,
    ) -> Result<GoogleResponseCode, BillingError> {
        self.launch_purchase_flow(
            PurchaseType::InApp,
            request_code,
            product_id,
            developer_payload,
        )
        .await
    }

    /// Launches the purchase flow for a subscription.
    pub async fn subscribe(
        &self,
        request_code: i32,
        product_id: &str,
        developer_payload: Option<&str>,
    ) -> Result<GoogleResponseCode, BillingError> {
        self.launch_purchase_flow(
            PurchaseType::Subscription,
            request_code,
            product_id,
            developer_payload,
        )
        .await
    }

    /// Consumes a purchased product so that it can be bought again.
    /// Subscriptions cannot be consumed.
    pub async fn consume(&self, purchase_token: &str) -> Result<GoogleResponseCode, BillingError> {
        self.datasource.consume_purchase(purchase_token).await
    }

    /// Decodes the result of a purchase flow started by
    /// [`BillingManager::purchase`] or [`BillingManager::subscribe`].
    ///
    /// Returns `None` if the result does not belong to a pending purchase
    /// flow.
    pub fn on_activity_result(
        &self,
        request_code: i32,
        result_code: ActivityResult,
        data: Option<&Intent>,
    ) -> Option<PurchaseResult<Order>> {
        if request_code == 0 {
            return None;
        }
        let product_type = {
            let mut pending = self
                .pending_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match *pending {
                Some((code, product_type)) if code == request_code => {
                    *pending = None;
                    product_type
                }
                _ => return None,
            }
        };

        match result_code {
            ActivityResult::Ok => {
                let order = data.and_then(|data| Self::decode_purchase(data, product_type));
                Some(match order {
                    Some(order) => PurchaseResult {
                        response: GoogleResponseCode::Ok.into(),
                        order: Some(order),
                    },
                    None => PurchaseResult {
                        response: GoogleResponseCode::Error.into(),
                        order: None,
                    },
                })
            }
            ActivityResult::Canceled => Some(PurchaseResult {
                response: GoogleResponseCode::UserCanceled.into(),
                order: None,
            }),
            ActivityResult::Other(_) => None,
        }
    }

    pub(crate) fn package_name(&self) -> &str {
        self.datasource.package_name()
    }

    async fn query_purchasables(
        &self,
        purchase_type: PurchaseType,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        let (response_code, details) = self
            .datasource
            .get_sku_details(purchase_type, product_ids)
            .await?;
        Ok(QueryResult::new(
            response_code,
            details
                .into_iter()
                .map(|m| Purchasable::from_google_sku_details(m, purchase_type))
                .collect(),
        ))
    }

    /// Walks the purchase history page by page. A failing page ends the walk;
    /// its response code is returned along with the orders of the pages
    /// fetched before it. A repeated continuation token ends the walk with
    /// `Error`.
    async fn query_purchased(
        &self,
        purchase_type: PurchaseType,
    ) -> Result<QueryResult<Order>, BillingError> {
        let mut orders = Vec::new();
        let mut continuation_token: Option<String> = None;
        let mut seen_tokens = HashSet::new();
        loop {
            let page = self
                .datasource
                .get_purchases(purchase_type, continuation_token.as_deref())
                .await?;
            if !page.response_code.is_ok() {
                return Ok(QueryResult::new(page.response_code, orders));
            }
            orders.extend(
                page.purchases
                    .into_iter()
                    .map(|m| Order::from_google_purchase_data(m, purchase_type)),
            );
            match page.continuation_token {
                Some(token) if !seen_tokens.insert(token.clone()) => {
                    warn!(token = %token, "purchase history repeated a continuation token");
                    return Ok(QueryResult::new(GoogleResponseCode::Error, orders));
                }
                Some(token) => continuation_token = Some(token),
                None => return Ok(QueryResult::new(GoogleResponseCode::Ok, orders)),
            }
        }
    }

    async fn launch_purchase_flow(
        &self,
        purchase_type: PurchaseType,
        request_code: i32,
        product_id: &str,
        developer_payload: Option<&str>,
    ) -> Result<GoogleResponseCode, BillingError> {
        let (response_code, buy_intent) = self
            .datasource
            .get_buy_intent(purchase_type, product_id, developer_payload)
            .await?;
        if let Some(buy_intent) = buy_intent {
            let launched = self
                .host
                .start_intent_sender_for_result(&buy_intent, request_code);
            let mut pending = self
                .pending_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            match launched {
                Ok(()) => *pending = Some((request_code, purchase_type)),
                Err(e) => {
                    *pending = None;
                    return Err(BillingError::Launch(e));
                }
            }
        }
        Ok(response_code)
    }

    fn decode_purchase(data: &Intent, product_type: PurchaseType) -> Option<Order> {
        let response_code =
            GoogleResponseCode::from(data.extras.get_int_or(GOOGLE_RESPONSE_CODE, 0));
        if !response_code.is_ok() {
            return None;
        }
        let Some(purchase_data) = data.extras.get_string(GOOGLE_INAPP_PURCHASE_DATA) else {
            warn!("purchase result is missing {GOOGLE_INAPP_PURCHASE_DATA}");
            return None;
        };
        match serde_json::from_str::<PurchaseDataModel>(purchase_data) {
            Ok(m) => Some(Order::from_google_purchase_data(m, product_type)),
            Err(e) => {
                warn!(error = %e, "failed to parse purchase result");
                None
            }
        }
    }
}

impl Purchasable {
    fn from_google_sku_details(m: SkuDetailsModel, product_type: PurchaseType) -> Self {
        Purchasable {
            product_id: m.product_id,
            title: m.title,
            description: m.description,
            price: m.price,
            details: PurchasableDetails::Google { product_type },
        }
    }
}

impl Order {
    fn from_google_purchase_data(m: PurchaseDataModel, product_type: PurchaseType) -> Self {
        Order {
            order_id: m.order_id,
            product_id: m.product_id,
            purchase_time: m.purchase_time,
            details: OrderDetails::Google {
                package_name: m.package_name,
                product_type,
                purchase_state: PurchaseState::from(m.purchase_state),
                developer_payload: m.developer_payload,
                purchase_token: m.purchase_token,
            },
        }
    }
}

