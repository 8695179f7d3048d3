use std::sync::Arc;

use crate::{
    config::BillingConfig,
    data::repositories::{
        google_iab_service_impl::GoogleIabService, samsung_iab_service_impl::SamsungIabService,
    },
    domain::{
        entities::{
            order::Order,
            purchasable::Purchasable,
            query_result::{PurchaseResult, QueryResult},
            response_code::VendorResponse,
            verification::VerificationOutcome,
        },
        repositories::iab_service::IabService,
    },
    errors::BillingError,
    platform::{
        host::{HostActivity, ServiceConnector},
        intent::{ActivityResult, Intent},
        remote::{IapConnector, InAppBillingService},
    },
};

pub struct IabUtil<S: IabService> {
    iab_service: S,
}

impl<S: IabService> IabUtil<S> {
    pub fn from_service(iab_service: S) -> Self {
        Self { iab_service }
    }

    pub async fn connect(&self) -> Result<(), BillingError> {
        self.iab_service.connect().await
    }

    pub async fn disconnect(&self) {
        self.iab_service.disconnect().await
    }

    pub fn is_connected(&self) -> bool {
        self.iab_service.is_connected()
    }

    pub async fn query_purchasable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.iab_service.query_purchasable_products(product_ids).await
    }

    pub async fn query_subscribable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.iab_service
            .query_subscribable_products(product_ids)
            .await
    }

    pub async fn query_purchased_products(
        &self,
        product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.iab_service
            .query_purchased_products(product_group_id)
            .await
    }

    pub async fn query_subscribed_products(
        &self,
        product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.iab_service
            .query_subscribed_products(product_group_id)
            .await
    }

    pub async fn purchase_product(
        &self,
        product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        self.iab_service
            .purchase_product(product_group_id, product_id)
            .await
    }

    pub async fn subscribe_product(
        &self,
        product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        self.iab_service
            .subscribe_product(product_group_id, product_id)
            .await
    }

    /// Forwards the host's activity-result callback. The raw result code is
    /// converted here.
    pub fn on_activity_result(
        &self,
        request_code: i32,
        result_code: i32,
        data: Option<&Intent>,
    ) -> Option<PurchaseResult<Order>> {
        self.iab_service
            .on_activity_result(request_code, ActivityResult::from(result_code), data)
    }

    pub async fn verify_purchase(
        &self,
        order: &Order,
    ) -> Result<VerificationOutcome, BillingError> {
        self.iab_service.verify_purchase(order).await
    }

    /// The wrapped adapter, for vendor-specific operations.
    pub fn service(&self) -> &S {
        &self.iab_service
    }
}

impl IabUtil<GoogleIabService> {
    pub fn google(
        host: Arc<dyn HostActivity>,
        connector: Arc<dyn ServiceConnector<dyn InAppBillingService>>,
        config: &BillingConfig,
    ) -> Result<Self, BillingError> {
        config.validate()?;
        Ok(Self {
            iab_service: GoogleIabService::new(host, connector, config),
        })
    }
}

impl IabUtil<SamsungIabService> {
    pub fn samsung(
        host: Arc<dyn HostActivity>,
        connector: Arc<dyn ServiceConnector<dyn IapConnector>>,
        config: &BillingConfig,
    ) -> Result<Self, BillingError> {
        config.validate()?;
        Ok(Self {
            iab_service: SamsungIabService::new(host, connector, config),
        })
    }
}
