use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// One entry of the `RESULT_LIST` returned by `getItemList`.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ItemModel {
    #[serde(rename = "mItemId")]
    pub(crate) item_id: String,
    #[serde(rename = "mItemName")]
    pub(crate) item_name: String,
    /// Price with currency symbol, e.g. "$0.99".
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
    /// Only set for subscriptions: YEAR, MONTH, WEEK or DAY.
    #[serde(rename = "mSubscriptionDurationUnit", default)]
    pub(crate) subscription_duration_unit: Option<String>,
    /// Only set for subscriptions. Sent either as a number or as a string.
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "mSubscriptionDurationMultiplier")]
    pub(crate) subscription_duration_multiplier: Option<i32>,
}
