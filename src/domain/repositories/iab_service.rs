use async_trait::async_trait;

use crate::{
    domain::entities::{
        order::Order,
        purchasable::Purchasable,
        query_result::{PurchaseResult, QueryResult},
        response_code::VendorResponse,
        verification::VerificationOutcome,
    },
    errors::BillingError,
    platform::intent::{ActivityResult, Intent},
};

/// Vendor-neutral in-app billing operations.
///
/// Vendors that do not organise products into groups ignore the
/// `product_group_id` arguments.
#[async_trait]
pub trait IabService: Send + Sync {
    async fn connect(&self) -> Result<(), BillingError>;

    async fn disconnect(&self);

    fn is_connected(&self) -> bool;

    async fn query_purchasable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError>;

    async fn query_subscribable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError>;

    async fn query_purchased_products(
        &self,
        product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError>;

    async fn query_subscribed_products(
        &self,
        product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError>;

    /// Launches the purchase flow of a product. The outcome arrives through
    /// [`IabService::on_activity_result`].
    async fn purchase_product(
        &self,
        product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError>;

    async fn subscribe_product(
        &self,
        product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError>;

    /// Decodes an activity result forwarded by the host. Returns `None` for
    /// results that belong to no purchase flow of this service.
    fn on_activity_result(
        &self,
        request_code: i32,
        result_code: ActivityResult,
        data: Option<&Intent>,
    ) -> Option<PurchaseResult<Order>>;

    /// Checks an order with the vendor's servers.
    async fn verify_purchase(&self, order: &Order) -> Result<VerificationOutcome, BillingError>;
}
