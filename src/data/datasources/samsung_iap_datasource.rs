use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    constants::{
        SAMSUNG_ERROR_STRING, SAMSUNG_IAP_PACKAGE, SAMSUNG_IAP_SERVICE, SAMSUNG_INBOX_DATE_FORMAT,
        SAMSUNG_INBOX_START_DATE, SAMSUNG_RESULT_LIST, SAMSUNG_STATUS_CODE, SAMSUNG_UPGRADE_URL,
    },
    data::models::samsung_iap::{item_model::ItemModel, purchase_model::PurchaseModel},
    domain::entities::{product_type::SamsungItemType, response_code::SamsungStatus},
    errors::BillingError,
    platform::{
        bundle::Bundle,
        connection::{ConnectionWatcher, ServiceConnection},
        host::ServiceConnector,
        intent::Intent,
        remote::IapConnector,
    },
};

use super::utils::parse_records;

const VENDOR: &str = "samsung_iap";

/// Raw result of `init`.
#[derive(Debug)]
pub(crate) struct InitResponse {
    pub(crate) status: SamsungStatus,
    pub(crate) error_string: Option<String>,
    pub(crate) upgrade_url: Option<String>,
}

#[async_trait]
pub(crate) trait SamsungIapDatasource: Send + Sync {
    async fn init(&self, mode: i32) -> Result<InitResponse, BillingError>;

    /// getItemList, for items of a single type within an item group.
    async fn get_item_list(
        &self,
        mode: i32,
        item_group_id: &str,
        item_type: SamsungItemType,
    ) -> Result<(SamsungStatus, Vec<ItemModel>), BillingError>;

    /// getItemsInbox, for every purchase made since the epoch.
    async fn get_items_inbox(
        &self,
        item_group_id: &str,
    ) -> Result<(SamsungStatus, Vec<PurchaseModel>), BillingError>;
}

pub(crate) struct SamsungIapDatasourceImpl {
    connection: ServiceConnection<dyn IapConnector>,
    package_name: String,
    start_num: i32,
    end_num: i32,
}

#[async_trait]
impl SamsungIapDatasource for SamsungIapDatasourceImpl {
    async fn init(&self, mode: i32) -> Result<InitResponse, BillingError> {
        let connector = self.connection.service()?;
        let response = connector
            .init(mode)
            .await
            .map_err(BillingError::remote("init"))?;
        Ok(InitResponse {
            status: Self::status(&response),
            error_string: response.get_string(SAMSUNG_ERROR_STRING).map(str::to_string),
            upgrade_url: response.get_string(SAMSUNG_UPGRADE_URL).map(str::to_string),
        })
    }

    async fn get_item_list(
        &self,
        mode: i32,
        item_group_id: &str,
        item_type: SamsungItemType,
    ) -> Result<(SamsungStatus, Vec<ItemModel>), BillingError> {
        let connector = self.connection.service()?;
        let response = connector
            .get_item_list(
                mode,
                &self.package_name,
                item_group_id,
                self.start_num,
                self.end_num,
                item_type.code(),
            )
            .await
            .map_err(BillingError::remote("getItemList"))?;
        Self::parse_result_list(&response)
    }

    async fn get_items_inbox(
        &self,
        item_group_id: &str,
    ) -> Result<(SamsungStatus, Vec<PurchaseModel>), BillingError> {
        let connector = self.connection.service()?;
        let end_date = Utc::now().format(SAMSUNG_INBOX_DATE_FORMAT).to_string();
        let response = connector
            .get_items_inbox(
                &self.package_name,
                item_group_id,
                self.start_num,
                self.end_num,
                SAMSUNG_INBOX_START_DATE,
                &end_date,
            )
            .await
            .map_err(BillingError::remote("getItemsInbox"))?;
        Self::parse_result_list(&response)
    }
}

impl SamsungIapDatasourceImpl {
    pub(crate) fn new(
        connector: Arc<dyn ServiceConnector<dyn IapConnector>>,
        package_name: String,
        start_num: i32,
        end_num: i32,
    ) -> Self {
        Self {
            connection: ServiceConnection::new(
                SAMSUNG_IAP_SERVICE,
                Intent::with_action(SAMSUNG_IAP_SERVICE).set_package(SAMSUNG_IAP_PACKAGE),
                connector,
            ),
            package_name,
            start_num,
            end_num,
        }
    }

    pub(crate) async fn connect(&self) -> Result<(), BillingError> {
        self.connection.connect().await
    }

    pub(crate) async fn disconnect(&self) {
        self.connection.disconnect().await
    }

    pub(crate) fn on_service_disconnected(&self) {
        self.connection.on_service_disconnected()
    }

    pub(crate) fn is_connected(&self) -> bool {
        self.connection.is_connected()
    }

    pub(crate) fn watch(&self) -> ConnectionWatcher<dyn IapConnector> {
        self.connection.watch()
    }

    pub(crate) fn package_name(&self) -> &str {
        &self.package_name
    }

    fn status(bundle: &Bundle) -> SamsungStatus {
        SamsungStatus::from(bundle.get_int_or(SAMSUNG_STATUS_CODE, SamsungStatus::Common.code()))
    }

    fn parse_result_list<T: serde::de::DeserializeOwned>(
        response: &Bundle,
    ) -> Result<(SamsungStatus, Vec<T>), BillingError> {
        let status = Self::status(response);
        if !status.is_ok() {
            return Ok((status, Vec::new()));
        }
        let results = response
            .get_string_list(SAMSUNG_RESULT_LIST)
            .ok_or(BillingError::MissingField(SAMSUNG_RESULT_LIST))?;
        Ok((status, parse_records(VENDOR, results)))
    }
}
