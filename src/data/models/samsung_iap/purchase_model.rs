use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_with::{serde_as, PickFirst, TimestampMilliSeconds};

/// Purchase record, found in each `RESULT_LIST` entry of `getItemsInbox` and
/// in the `RESULT_OBJECT` extra of a completed payment.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct PurchaseModel {
    #[serde(rename = "mItemId")]
    pub(crate) item_id: String,
    #[serde(rename = "mItemName")]
    pub(crate) item_name: String,
    #[serde(rename = "mItemPriceString")]
    pub(crate) item_price_string: String,
    #[serde(rename = "mItemDesc")]
    pub(crate) item_desc: String,
    #[serde(rename = "mItemImageUrl")]
    pub(crate) item_image_url: String,
    #[serde(rename = "mItemDownloadUrl")]
    pub(crate) item_download_url: String,
    #[serde(rename = "mItemType", default)]
    pub(crate) item_type: Option<String>,
    /// Milliseconds since the epoch. Sent either as a number or as a string.
    #[serde_as(as = "PickFirst<(TimestampMilliSeconds<i64>, TimestampMilliSeconds<String>)>")]
    #[serde(rename = "mPurchaseDate")]
    pub(crate) purchase_date: DateTime<Utc>,
    #[serde(rename = "mPurchaseId")]
    pub(crate) purchase_id: String,
    #[serde(rename = "mPaymentId")]
    pub(crate) payment_id: String,
    /// Only present on a completed payment.
    #[serde(rename = "mVerifyUrl", default)]
    pub(crate) verify_url: Option<String>,
}
