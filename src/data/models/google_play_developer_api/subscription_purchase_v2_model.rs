#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Data structure returned by the Google Play Developer API when querying for a
/// subscription purchase. Only the fields needed to judge validity are
/// modelled.
///
/// https://developers.google.com/android-publisher/api-ref/rest/v3/purchases.subscriptionsv2#SubscriptionPurchaseV2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionPurchaseV2Model {
    pub(crate) subscription_state: SubscriptionState,
    #[serde(default)]
    pub(crate) line_items: Vec<SubscriptionPurchaseLineItem>,
    pub(crate) latest_order_id: Option<String>,
    pub(crate) start_time: Option<DateTime<Utc>>,
    /// Only present if this subscription purchase is a test purchase.
    pub(crate) test_purchase: Option<TestPurchase>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum SubscriptionState {
    SubscriptionStateUnspecified,
    SubscriptionStatePending,
    SubscriptionStateActive,
    SubscriptionStatePaused,
    SubscriptionStateInGracePeriod,
    SubscriptionStateOnHold,
    SubscriptionStateCanceled,
    SubscriptionStateExpired,
    SubscriptionStatePendingPurchaseCanceled,
    #[serde(untagged)]
    Unknown(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SubscriptionPurchaseLineItem {
    pub(crate) product_id: String,
    pub(crate) expiry_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TestPurchase {}
