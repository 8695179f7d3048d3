use async_trait::async_trait;
use thiserror::Error;

use super::bundle::Bundle;

/// Failure of a call across the process boundary to a vendor service.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct RemoteError(pub String);

/// Google Play's `IInAppBillingService` interface.
///
/// Implementations bridge to the bound service. Calls may block for the
/// duration of the IPC round-trip and must not be issued from the host's UI
/// thread.
#[async_trait]
pub trait InAppBillingService: Send + Sync {
    /// getSkuDetails:
    ///
    /// purchase_type:
    ///   "inapp" or "subs".
    /// sku_bundle:
    ///   Carries the queried product IDs under `ITEM_ID_LIST`.
    async fn get_sku_details(
        &self,
        api_version: i32,
        package_name: &str,
        purchase_type: &str,
        sku_bundle: &Bundle,
    ) -> Result<Bundle, RemoteError>;

    /// getPurchases:
    ///
    /// continuation_token:
    ///   `INAPP_CONTINUATION_TOKEN` of the previous page, or `None` for the
    ///   first page.
    async fn get_purchases(
        &self,
        api_version: i32,
        package_name: &str,
        purchase_type: &str,
        continuation_token: Option<&str>,
    ) -> Result<Bundle, RemoteError>;

    /// getBuyIntent:
    ///
    /// developer_payload:
    ///   Returned verbatim in the purchase data of the resulting order.
    async fn get_buy_intent(
        &self,
        api_version: i32,
        package_name: &str,
        sku: &str,
        purchase_type: &str,
        developer_payload: Option<&str>,
    ) -> Result<Bundle, RemoteError>;

    /// consumePurchase: returns the raw response code.
    async fn consume_purchase(
        &self,
        api_version: i32,
        package_name: &str,
        purchase_token: &str,
    ) -> Result<i32, RemoteError>;
}

/// Samsung's `IAPConnector` interface.
#[async_trait]
pub trait IapConnector: Send + Sync {
    async fn init(&self, mode: i32) -> Result<Bundle, RemoteError>;

    async fn get_item_list(
        &self,
        mode: i32,
        package_name: &str,
        item_group_id: &str,
        start_num: i32,
        end_num: i32,
        item_type: &str,
    ) -> Result<Bundle, RemoteError>;

    /// start_date / end_date:
    ///   Inclusive purchase date range, formatted as `yyyyMMdd`.
    async fn get_items_inbox(
        &self,
        package_name: &str,
        item_group_id: &str,
        start_num: i32,
        end_num: i32,
        start_date: &str,
        end_date: &str,
    ) -> Result<Bundle, RemoteError>;
}
