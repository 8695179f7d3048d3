use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, TimestampMilliSeconds};

/// JSON purchase record found under `INAPP_PURCHASE_DATA` (purchase result)
/// and in each entry of `INAPP_PURCHASE_DATA_LIST` (purchase history).
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PurchaseDataModel {
    /// A unique order identifier for the transaction. This corresponds to the
    /// Google payments order ID.
    pub(crate) order_id: String,
    /// The application package from which the purchase originated.
    pub(crate) package_name: String,
    pub(crate) product_id: String,
    /// The time the product was purchased, in milliseconds since the epoch
    /// (Jan 1, 1970).
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub(crate) purchase_time: DateTime<Utc>,
    /// 0 (purchased), 1 (canceled), or 2 (refunded).
    pub(crate) purchase_state: i32,
    /// A developer-specified string that contains supplemental information
    /// about an order.
    #[serde(default)]
    pub(crate) developer_payload: Option<String>,
    /// A token that uniquely identifies a purchase for a given item and user
    /// pair.
    pub(crate) purchase_token: String,
}
