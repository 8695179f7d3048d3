use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    constants::{
        GOOGLE_BILLING_ACTION, GOOGLE_BILLING_PACKAGE, GOOGLE_BUY_INTENT, GOOGLE_DETAILS_LIST,
        GOOGLE_INAPP_CONTINUATION_TOKEN, GOOGLE_INAPP_PURCHASE_DATA_LIST, GOOGLE_ITEM_ID_LIST,
        GOOGLE_RESPONSE_CODE,
    },
    data::models::google_play_billing::{
        purchase_data_model::PurchaseDataModel, sku_details_model::SkuDetailsModel,
    },
    domain::entities::{product_type::PurchaseType, response_code::GoogleResponseCode},
    errors::BillingError,
    platform::{
        bundle::Bundle,
        connection::{ConnectionWatcher, ServiceConnection},
        host::ServiceConnector,
        intent::{Intent, PendingIntent},
        remote::InAppBillingService,
    },
};

use super::utils::parse_records;

const VENDOR: &str = "google_play";

/// One page of `getPurchases`.
#[derive(Debug)]
pub(crate) struct PurchasesPage {
    pub(crate) response_code: GoogleResponseCode,
    pub(crate) purchases: Vec<PurchaseDataModel>,
    pub(crate) continuation_token: Option<String>,
}

#[async_trait]
pub(crate) trait GooglePlayBillingDatasource: Send + Sync {
    /// getSkuDetails, for all given product IDs in a single request.
    async fn get_sku_details(
        &self,
        purchase_type: PurchaseType,
        product_ids: &[String],
    ) -> Result<(GoogleResponseCode, Vec<SkuDetailsModel>), BillingError>;

    /// getPurchases, for a single page of the purchase history.
    async fn get_purchases(
        &self,
        purchase_type: PurchaseType,
        continuation_token: Option<&str>,
    ) -> Result<PurchasesPage, BillingError>;

    /// getBuyIntent. The pending intent is only present on success.
    async fn get_buy_intent(
        &self,
        purchase_type: PurchaseType,
        product_id: &str,
        developer_payload: Option<&str>,
    ) -> Result<(GoogleResponseCode, Option<PendingIntent>), BillingError>;

    async fn consume_purchase(&self, purchase_token: &str)
        -> Result<GoogleResponseCode, BillingError>;
}

pub(crate) struct GooglePlayBillingDatasourceImpl {
    connection: ServiceConnection<dyn InAppBillingService>,
    package_name: String,
    api_version: i32,
}

#[async_trait]
impl GooglePlayBillingDatasource for GooglePlayBillingDatasourceImpl {
    async fn get_sku_details(
        &self,
        purchase_type: PurchaseType,
        product_ids: &[String],
    ) -> Result<(GoogleResponseCode, Vec<SkuDetailsModel>), BillingError> {
        let service = self.connection.service()?;
        let mut request = Bundle::new();
        request.put_string_list(GOOGLE_ITEM_ID_LIST, product_ids.to_vec());

        let response = service
            .get_sku_details(
                self.api_version,
                &self.package_name,
                purchase_type.as_str(),
                &request,
            )
            .await
            .map_err(BillingError::remote("getSkuDetails"))?;

        let response_code = Self::response_code(&response);
        if !response_code.is_ok() {
            return Ok((response_code, Vec::new()));
        }
        let details = response
            .get_string_list(GOOGLE_DETAILS_LIST)
            .ok_or(BillingError::MissingField(GOOGLE_DETAILS_LIST))?;
        Ok((response_code, parse_records(VENDOR, details)))
    }

    async fn get_purchases(
        &self,
        purchase_type: PurchaseType,
        continuation_token: Option<&str>,
    ) -> Result<PurchasesPage, BillingError> {
        let service = self.connection.service()?;
        let response = service
            .get_purchases(
                self.api_version,
                &self.package_name,
                purchase_type.as_str(),
                continuation_token,
            )
            .await
            .map_err(BillingError::remote("getPurchases"))?;

        let response_code = Self::response_code(&response);
        if !response_code.is_ok() {
            return Ok(PurchasesPage {
                response_code,
                purchases: Vec::new(),
                continuation_token: None,
            });
        }
        let purchases = response
            .get_string_list(GOOGLE_INAPP_PURCHASE_DATA_LIST)
            .ok_or(BillingError::MissingField(GOOGLE_INAPP_PURCHASE_DATA_LIST))?;
        Ok(PurchasesPage {
            response_code,
            purchases: parse_records(VENDOR, purchases),
            continuation_token: response
                .get_string(GOOGLE_INAPP_CONTINUATION_TOKEN)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        })
    }

    async fn get_buy_intent(
        &self,
        purchase_type: PurchaseType,
        product_id: &str,
        developer_payload: Option<&str>,
    ) -> Result<(GoogleResponseCode, Option<PendingIntent>), BillingError> {
        let service = self.connection.service()?;
        let response = service
            .get_buy_intent(
                self.api_version,
                &self.package_name,
                product_id,
                purchase_type.as_str(),
                developer_payload,
            )
            .await
            .map_err(BillingError::remote("getBuyIntent"))?;

        let response_code = Self::response_code(&response);
        if !response_code.is_ok() {
            return Ok((response_code, None));
        }
        match response.get_pending_intent(GOOGLE_BUY_INTENT) {
            Some(intent) => Ok((response_code, Some(intent.clone()))),
            None => Ok((GoogleResponseCode::Error, None)),
        }
    }

    async fn consume_purchase(
        &self,
        purchase_token: &str,
    ) -> Result<GoogleResponseCode, BillingError> {
        let service = self.connection.service()?;
        let code = service
            .consume_purchase(self.api_version, &self.package_name, purchase_token)
            .await
            .map_err(BillingError::remote("consumePurchase"))?;
        Ok(GoogleResponseCode::from(code))
    }
}

impl GooglePlayBillingDatasourceImpl {
    pub(crate) fn new(
        connector: Arc<dyn ServiceConnector<dyn InAppBillingService>>,
        package_name: String,
        api_version: i32,
    ) -> Self {
        Self {
            connection: ServiceConnection::new(
                GOOGLE_BILLING_ACTION,
                Intent::with_action(GOOGLE_BILLING_ACTION).set_package(GOOGLE_BILLING_PACKAGE),
                connector,
            ),
            package_name,
            api_version,
        }
    }

    pub(crate) async fn connect(&self) -> Result<(), BillingError> {
        self.connection.connect().await
    }

    pub(crate) async fn disconnect(&self) {
        self.connection.disconnect().await
    }

    pub(crate) fn on_service_disconnected(&self) {
        self.connection.on_service_disconnected()
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    pub(crate) fn watch(&self) -> ConnectionWatcher<dyn InAppBillingService> {
        self.connection.watch()
    }

    pub(crate) fn package_name(&self) -> &str {
        &self.package_name
    }

    /// A missing response code is treated as a fatal error.
    fn response_code(bundle: &Bundle) -> GoogleResponseCode {
        GoogleResponseCode::from(
            bundle.get_int_or(GOOGLE_RESPONSE_CODE, GoogleResponseCode::Error.code()),
        )
    }
}
