#![allow(dead_code)]

use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr, PickFirst};

/// Response of the Samsung purchase verification endpoint (the `mVerifyUrl`
/// of a completed payment).
#[serde_as]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerificationModel {
    /// Whether the purchase is genuine. Sent as "true"/"false" or as a
    /// boolean.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub(crate) status: bool,
    pub(crate) payment_id: String,
    #[serde(default)]
    pub(crate) item_id: Option<String>,
    #[serde(default)]
    pub(crate) purchase_date: Option<String>,
}
