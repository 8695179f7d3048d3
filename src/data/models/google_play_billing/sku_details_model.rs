#![allow(dead_code)]

use serde::Deserialize;

/// One entry of the `DETAILS_LIST` returned by `getSkuDetails`.
///
/// Only the fields needed to display an item are required; the rest were
/// added in later revisions of the billing service and may be absent.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SkuDetailsModel {
    /// The product ID for the product.
    pub(crate) product_id: String,
    /// Value must be "inapp" for an in-app product or "subs" for
    /// subscriptions.
    #[serde(rename = "type")]
    pub(crate) product_type: Option<String>,
    /// Formatted price of the item, including its currency sign. The price
    /// does not include tax.
    pub(crate) price: String,
    /// Price in micro-units, where 1,000,000 micro-units equal one unit of
    /// the currency.
    pub(crate) price_amount_micros: Option<i64>,
    /// ISO 4217 currency code for price.
    pub(crate) price_currency_code: Option<String>,
    pub(crate) title: String,
    pub(crate) description: String,
}
