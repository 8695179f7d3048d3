#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_repr::Deserialize_repr;
use serde_with::{serde_as, TimestampMilliSeconds};

/// Data structure returned by the Google Play Developer API when querying for a
/// product purchase.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.products#ProductPurchase
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductPurchaseModel {
    /// int64 sent as a string.
    #[serde_as(as = "TimestampMilliSeconds<String>")]
    pub(crate) purchase_time_millis: DateTime<Utc>,
    pub(crate) purchase_state: PurchaseState,
    pub(crate) consumption_state: ConsumptionState,
    pub(crate) acknowledgement_state: AcknowledgementState,
    pub(crate) developer_payload: Option<String>,
    pub(crate) order_id: Option<String>,
    /// Only set if the purchase was not made using the standard in-app
    /// billing flow.
    pub(crate) purchase_type: Option<PurchaseType>,
    /// If not present, the quantity is 1.
    pub(crate) quantity: Option<i32>,
    pub(crate) region_code: Option<String>,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PurchaseState {
    Purchased = 0,
    Canceled = 1,
    Pending = 2,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum ConsumptionState {
    YetToBeConsumed = 0,
    Consumed = 1,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PurchaseType {
    Test = 0,
    Promo = 1,
    Rewarded = 2,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum AcknowledgementState {
    YetToBeAcknowledged = 0,
    Acknowledged = 1,
}
