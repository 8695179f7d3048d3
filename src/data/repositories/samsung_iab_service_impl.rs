use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
};

use async_trait::async_trait;
use tokio::{runtime::Handle, sync::mpsc};
use tracing::{debug, warn};

use crate::{
    config::{BillingConfig, SamsungMode},
    constants::{
        ACTION_MAIN, ACTION_VIEW, CATEGORY_LAUNCHER, FLAG_ACTIVITY_CLEAR_TOP,
        FLAG_ACTIVITY_NEW_TASK, FLAG_INCLUDE_STOPPED_PACKAGES, SAMSUNG_ACCOUNT_ACTIVITY,
        SAMSUNG_IAP_PACKAGE, SAMSUNG_IAP_SIGNATURE_HASH, SAMSUNG_INSTALLATION_LINK,
        SAMSUNG_ITEM_GROUP_ID, SAMSUNG_ITEM_ID, SAMSUNG_PAYMENT_ACTIVITY,
        SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION, SAMSUNG_REQUEST_PAYMENT, SAMSUNG_RESULT_OBJECT,
        SAMSUNG_STATUS_CODE, SAMSUNG_THIRD_PARTY_NAME,
    },
    data::{
        datasources::{
            samsung_iap_datasource::{SamsungIapDatasource, SamsungIapDatasourceImpl},
            samsung_verification_datasource::{
                SamsungVerificationDatasource, SamsungVerificationDatasourceImpl,
            },
        },
        models::samsung_iap::{item_model::ItemModel, purchase_model::PurchaseModel},
    },
    domain::{
        entities::{
            order::{Order, OrderDetails},
            product_type::{DurationUnit, SamsungItemType, SubscriptionPeriod},
            purchasable::{Purchasable, PurchasableDetails},
            query_result::{PurchaseResult, QueryResult},
            response_code::{SamsungStatus, VendorResponse},
            verification::{VerificationOutcome, VerificationReport},
        },
        repositories::iab_service::IabService,
    },
    errors::BillingError,
    platform::{
        bundle::Bundle,
        connection::ConnectionWatcher,
        host::{HostActivity, ServiceConnector},
        intent::{ActivityResult, ComponentName, Intent},
        remote::IapConnector,
    },
};

/// Outcome of [`SamsungIabService::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SamsungInit {
    Ready,
    /// The installed Samsung IAP application is too old. The message is meant
    /// for the user; the URL leads to the upgrade, see
    /// [`SamsungIabService::open_upgrade_page`].
    UpgradeRequired {
        message: Option<String>,
        upgrade_url: Option<String>,
    },
    Failed(SamsungStatus),
}

/// [`IabService`] backed by Samsung IAP.
///
/// Products are organised in item groups: the first product ID passed to the
/// catalog queries, and the group ID passed to the others, select the group.
pub struct SamsungIabService {
    host: Arc<dyn HostActivity>,
    datasource: SamsungIapDatasourceImpl,
    verification: Arc<dyn SamsungVerificationDatasource>,
    mode: AtomicI32,
    reports: Option<mpsc::UnboundedSender<VerificationReport>>,
}

#[async_trait]
impl IabService for SamsungIabService {
    async fn connect(&self) -> Result<(), BillingError> {
        self.datasource.connect().await
    }

    async fn disconnect(&self) {
        self.datasource.disconnect().await
    }

    fn is_connected(&self) -> bool {
        self.datasource.is_connected()
    }

    async fn query_purchasable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.query_items(
            product_ids.first().map(String::as_str),
            &[SamsungItemType::Consumable, SamsungItemType::NonConsumable],
        )
        .await
    }

    async fn query_subscribable_products(
        &self,
        product_ids: &[String],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.query_items(
            product_ids.first().map(String::as_str),
            &[SamsungItemType::Subscription],
        )
        .await
    }

    async fn query_purchased_products(
        &self,
        product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.query_inbox(product_group_id, |item_type| {
            item_type != Some(SamsungItemType::Subscription)
        })
        .await
    }

    async fn query_subscribed_products(
        &self,
        product_group_id: Option<&str>,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.query_inbox(product_group_id, |item_type| {
            item_type == Some(SamsungItemType::Subscription)
        })
        .await
    }

    async fn purchase_product(
        &self,
        product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        self.launch_payment(product_group_id, product_id)
    }

    async fn subscribe_product(
        &self,
        product_group_id: Option<&str>,
        product_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        self.launch_payment(product_group_id, product_id)
    }

    /// Decodes the result of the payment activity. When a report channel is
    /// registered, a completed purchase is also verified in the background.
    fn on_activity_result(
        &self,
        request_code: i32,
        result_code: ActivityResult,
        data: Option<&Intent>,
    ) -> Option<PurchaseResult<Order>> {
        if request_code != SAMSUNG_REQUEST_PAYMENT {
            return None;
        }
        let status = |default: SamsungStatus| {
            SamsungStatus::from(
                data.map(|data| data.extras.get_int_or(SAMSUNG_STATUS_CODE, default.code()))
                    .unwrap_or(default.code()),
            )
        };

        match result_code {
            ActivityResult::Ok => {
                let status = status(SamsungStatus::None);
                if !status.is_ok() {
                    return Some(PurchaseResult {
                        response: status.into(),
                        order: None,
                    });
                }
                let Some(order) = data.and_then(Self::decode_payment) else {
                    return Some(PurchaseResult {
                        response: SamsungStatus::Common.into(),
                        order: None,
                    });
                };
                self.spawn_verification(&order);
                Some(PurchaseResult {
                    response: status.into(),
                    order: Some(order),
                })
            }
            ActivityResult::Canceled => Some(PurchaseResult {
                response: status(SamsungStatus::Common).into(),
                order: None,
            }),
            ActivityResult::Other(_) => None,
        }
    }

    async fn verify_purchase(&self, order: &Order) -> Result<VerificationOutcome, BillingError> {
        verify(self.verification.as_ref(), order).await
    }
}

impl SamsungIabService {
    pub fn new(
        host: Arc<dyn HostActivity>,
        connector: Arc<dyn ServiceConnector<dyn IapConnector>>,
        config: &BillingConfig,
    ) -> Self {
        Self::with_verification(
            host,
            connector,
            config,
            Arc::new(SamsungVerificationDatasourceImpl::new()),
        )
    }

    pub(crate) fn with_verification(
        host: Arc<dyn HostActivity>,
        connector: Arc<dyn ServiceConnector<dyn IapConnector>>,
        config: &BillingConfig,
        verification: Arc<dyn SamsungVerificationDatasource>,
    ) -> Self {
        let package_name = host.package_name().to_string();
        Self {
            host,
            datasource: SamsungIapDatasourceImpl::new(
                connector,
                package_name,
                config.samsung_item_start,
                config.samsung_item_end,
            ),
            verification,
            mode: AtomicI32::new(config.samsung_mode.code()),
            reports: None,
        }
    }

    /// Registers the channel on which background verifications of completed
    /// purchases are reported.
    pub fn with_verification_reports(
        mut self,
        reports: mpsc::UnboundedSender<VerificationReport>,
    ) -> Self {
        self.reports = Some(reports);
        self
    }

    /// Initialises the Samsung IAP service in the given mode. The mode is kept
    /// for subsequent catalog queries.
    pub async fn init(&self, mode: SamsungMode) -> Result<SamsungInit, BillingError> {
        self.set_mode(mode);
        let response = self.datasource.init(mode.code()).await?;
        debug!(status = response.status.code(), "samsung iap initialised");
        Ok(match response.status {
            SamsungStatus::None => SamsungInit::Ready,
            SamsungStatus::UpgradeRequired => SamsungInit::UpgradeRequired {
                message: response.error_string,
                upgrade_url: response.upgrade_url,
            },
            status => SamsungInit::Failed(status),
        })
    }

    pub fn mode(&self) -> SamsungMode {
        SamsungMode::try_from(self.mode.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub fn set_mode(&self, mode: SamsungMode) {
        self.mode.store(mode.code(), Ordering::Relaxed);
    }

    /// To be called when the platform reports that the IAP service went away.
    pub fn on_service_disconnected(&self) {
        self.datasource.on_service_disconnected()
    }

    pub fn watch_connection(&self) -> ConnectionWatcher<dyn IapConnector> {
        self.datasource.watch()
    }

    /// Opens the upgrade page handed out by [`SamsungInit::UpgradeRequired`].
    pub fn open_upgrade_page(&self, upgrade_url: &str) -> Result<(), BillingError> {
        self.host
            .start_activity(
                Intent::with_action(ACTION_VIEW)
                    .set_data(upgrade_url)
                    .add_flags(FLAG_ACTIVITY_NEW_TASK),
            )
            .map_err(BillingError::Launch)
    }

    /// Whether the Samsung IAP application is installed. If it is not, its
    /// store page is opened.
    pub fn is_iap_installed(&self) -> bool {
        if self.host.is_package_installed(SAMSUNG_IAP_PACKAGE) {
            return true;
        }
        let intent = Intent::new().set_data(SAMSUNG_INSTALLATION_LINK).add_flags(
            FLAG_ACTIVITY_NEW_TASK | FLAG_ACTIVITY_CLEAR_TOP | FLAG_INCLUDE_STOPPED_PACKAGES,
        );
        if let Err(e) = self.host.start_activity(intent) {
            warn!(error = %e, "failed to open samsung iap installation page");
        }
        false
    }

    /// Checks that the installed Samsung IAP application is genuine and, if
    /// so, starts the account authorization activity. The outcome arrives
    /// through the host's activity-result callback; see
    /// [`SamsungIabService::is_account_authorized`].
    ///
    /// Returns `false` if the application is missing or not genuine.
    pub fn request_account_authorization(&self) -> Result<bool, BillingError> {
        if self.host.package_signature_hash(SAMSUNG_IAP_PACKAGE)
            != Some(SAMSUNG_IAP_SIGNATURE_HASH)
        {
            warn!("samsung iap package is missing or has an unexpected signature");
            return Ok(false);
        }
        self.host
            .start_activity_for_result(
                Intent::new().set_component(ComponentName::new(
                    SAMSUNG_IAP_PACKAGE,
                    SAMSUNG_ACCOUNT_ACTIVITY,
                )),
                SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION,
            )
            .map_err(BillingError::Launch)?;
        Ok(true)
    }

    pub fn is_account_authorized(request_code: i32, result_code: ActivityResult) -> bool {
        request_code == SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION && result_code == ActivityResult::Ok
    }

    async fn query_items(
        &self,
        item_group_id: Option<&str>,
        item_types: &[SamsungItemType],
    ) -> Result<QueryResult<Purchasable>, BillingError> {
        self.require_connection()?;
        let Some(item_group_id) = item_group_id else {
            return Ok(QueryResult::new(SamsungStatus::InvalidItemGroup, Vec::new()));
        };
        let mode = self.mode().code();
        let mut items = Vec::new();
        for item_type in item_types {
            let (status, models) = self
                .datasource
                .get_item_list(mode, item_group_id, *item_type)
                .await?;
            if !status.is_ok() {
                return Ok(QueryResult::new(status, items));
            }
            items.extend(
                models
                    .into_iter()
                    .map(|m| Purchasable::from_samsung_item(m, *item_type)),
            );
        }
        Ok(QueryResult::new(SamsungStatus::None, items))
    }

    async fn query_inbox(
        &self,
        item_group_id: Option<&str>,
        keep: impl Fn(Option<SamsungItemType>) -> bool + Send,
    ) -> Result<QueryResult<Order>, BillingError> {
        self.require_connection()?;
        let Some(item_group_id) = item_group_id else {
            return Ok(QueryResult::new(SamsungStatus::InvalidItemGroup, Vec::new()));
        };
        let (status, purchases) = self.datasource.get_items_inbox(item_group_id).await?;
        Ok(QueryResult::new(
            status,
            purchases
                .into_iter()
                .map(Order::from_samsung_purchase)
                .filter(|order| match &order.details {
                    OrderDetails::Samsung { item_type, .. } => keep(*item_type),
                    OrderDetails::Google { .. } => false,
                })
                .collect(),
        ))
    }

    fn require_connection(&self) -> Result<(), BillingError> {
        if !self.datasource.is_connected() {
            return Err(BillingError::NotConnected);
        }
        Ok(())
    }

    fn launch_payment(
        &self,
        item_group_id: Option<&str>,
        item_id: &str,
    ) -> Result<VendorResponse, BillingError> {
        self.require_connection()?;
        let Some(item_group_id) = item_group_id else {
            return Ok(SamsungStatus::InvalidItemGroup.into());
        };

        let mut extras = Bundle::new();
        extras
            .put_string(SAMSUNG_THIRD_PARTY_NAME, self.datasource.package_name())
            .put_string(SAMSUNG_ITEM_GROUP_ID, item_group_id)
            .put_string(SAMSUNG_ITEM_ID, item_id);
        let intent = Intent::with_action(ACTION_MAIN)
            .add_category(CATEGORY_LAUNCHER)
            .set_component(ComponentName::new(
                SAMSUNG_IAP_PACKAGE,
                SAMSUNG_PAYMENT_ACTIVITY,
            ))
            .put_extras(extras);
        self.host
            .start_activity_for_result(intent, SAMSUNG_REQUEST_PAYMENT)
            .map_err(BillingError::Launch)?;
        Ok(SamsungStatus::None.into())
    }

    fn decode_payment(data: &Intent) -> Option<Order> {
        let Some(result) = data.extras.get_string(SAMSUNG_RESULT_OBJECT) else {
            warn!("payment result is missing {SAMSUNG_RESULT_OBJECT}");
            return None;
        };
        match serde_json::from_str::<PurchaseModel>(result) {
            Ok(m) => Some(Order::from_samsung_purchase(m)),
            Err(e) => {
                warn!(error = %e, "failed to parse payment result");
                None
            }
        }
    }

    fn spawn_verification(&self, order: &Order) {
        let Some(reports) = self.reports.clone() else {
            return;
        };
        let Ok(runtime) = Handle::try_current() else {
            warn!(
                order_id = %order.order_id,
                "no async runtime, purchase is not verified"
            );
            return;
        };
        let verification = self.verification.clone();
        let order = order.clone();
        runtime.spawn(async move {
            let result = verify(verification.as_ref(), &order).await;
            // The receiver may already be gone.
            let _ = reports.send(VerificationReport {
                order_id: order.order_id,
                result,
            });
        });
    }
}

async fn verify(
    verification: &dyn SamsungVerificationDatasource,
    order: &Order,
) -> Result<VerificationOutcome, BillingError> {
    let OrderDetails::Samsung {
        payment_id,
        verify_url,
        ..
    } = &order.details
    else {
        return Err(BillingError::VerificationUnavailable(format!(
            "order '{}' was not placed through Samsung IAP",
            order.order_id
        )));
    };
    let verify_url = match verify_url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => return Ok(VerificationOutcome::Skipped),
    };
    if order.order_id.is_empty() || payment_id.is_empty() {
        return Ok(VerificationOutcome::Skipped);
    }

    let Some(response) = verification.fetch_verification(verify_url).await? else {
        return Ok(VerificationOutcome::Invalid {
            reason: "empty verification response".to_string(),
        });
    };
    if !response.status {
        return Ok(VerificationOutcome::Invalid {
            reason: "purchase was rejected".to_string(),
        });
    }
    if response.payment_id != *payment_id {
        return Ok(VerificationOutcome::Invalid {
            reason: format!(
                "payment id mismatch: expected '{payment_id}', got '{}'",
                response.payment_id
            ),
        });
    }
    Ok(VerificationOutcome::Valid)
}

impl Purchasable {
    fn from_samsung_item(m: ItemModel, requested_type: SamsungItemType) -> Self {
        let item_type = m
            .item_type
            .as_deref()
            .and_then(SamsungItemType::from_code)
            .unwrap_or(requested_type);
        let subscription = m
            .subscription_duration_unit
            .as_deref()
            .map(|unit| SubscriptionPeriod {
                unit: DurationUnit::from(unit),
                multiplier: m.subscription_duration_multiplier.unwrap_or(1),
            });
        Purchasable {
            product_id: m.item_id,
            title: m.item_name,
            description: m.item_desc,
            price: m.item_price_string,
            details: PurchasableDetails::Samsung {
                image_url: m.item_image_url,
                download_url: m.item_download_url,
                item_type,
                subscription,
            },
        }
    }
}

impl Order {
    fn from_samsung_purchase(m: PurchaseModel) -> Self {
        Order {
            order_id: m.purchase_id,
            product_id: m.item_id,
            purchase_time: m.purchase_date,
            details: OrderDetails::Samsung {
                product_name: m.item_name,
                description: m.item_desc,
                price: m.item_price_string,
                payment_id: m.payment_id,
                image_url: m.item_image_url,
                download_url: m.item_download_url,
                item_type: m.item_type.as_deref().and_then(SamsungItemType::from_code),
                verify_url: m.verify_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        data::models::samsung_iap::verification_model::VerificationModel,
        platform::{intent::PendingIntent, remote::RemoteError},
    };

    #[derive(Default)]
    struct RecordingHost {
        started: Mutex<Vec<(Intent, Option<i32>)>>,
        installed: bool,
        signature_hash: Option<i32>,
    }

    impl HostActivity for RecordingHost {
        fn package_name(&self) -> &str {
            "com.example.app"
        }

        fn start_intent_sender_for_result(&self, _: &PendingIntent, _: i32) -> Result<(), String> {
            Ok(())
        }

        fn start_activity_for_result(
            &self,
            intent: Intent,
            request_code: i32,
        ) -> Result<(), String> {
            self.started.lock().unwrap().push((intent, Some(request_code)));
            Ok(())
        }

        fn start_activity(&self, intent: Intent) -> Result<(), String> {
            self.started.lock().unwrap().push((intent, None));
            Ok(())
        }

        fn is_package_installed(&self, _: &str) -> bool {
            self.installed
        }

        fn package_signature_hash(&self, _: &str) -> Option<i32> {
            self.signature_hash
        }
    }

    struct UnreachableConnector;

    #[async_trait]
    impl ServiceConnector<dyn IapConnector> for UnreachableConnector {
        async fn bind(&self, _: &Intent) -> Result<Arc<dyn IapConnector>, RemoteError> {
            Err(RemoteError("samsung iap is not installed".to_string()))
        }

        async fn unbind(&self) {}
    }

    struct FakeVerification {
        body: Option<&'static str>,
        urls: Mutex<Vec<String>>,
    }

    impl FakeVerification {
        fn answering(body: Option<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                body,
                urls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl SamsungVerificationDatasource for FakeVerification {
        async fn fetch_verification(
            &self,
            verify_url: &str,
        ) -> Result<Option<VerificationModel>, BillingError> {
            self.urls.lock().unwrap().push(verify_url.to_string());
            Ok(self.body.map(|body| serde_json::from_str(body).unwrap()))
        }
    }

    fn service(host: Arc<RecordingHost>, verification: Arc<FakeVerification>) -> SamsungIabService {
        SamsungIabService::with_verification(
            host,
            Arc::new(UnreachableConnector),
            &BillingConfig::default(),
            verification,
        )
    }

    fn samsung_order(verify_url: Option<&str>) -> Order {
        Order {
            order_id: "purchase-1".to_string(),
            product_id: "gems_100".to_string(),
            purchase_time: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
            details: OrderDetails::Samsung {
                product_name: "100 Gems".to_string(),
                description: "A pouch of gems".to_string(),
                price: "$0.99".to_string(),
                payment_id: "payment-1".to_string(),
                image_url: String::new(),
                download_url: String::new(),
                item_type: Some(SamsungItemType::Consumable),
                verify_url: verify_url.map(str::to_string),
            },
        }
    }

    fn payment_result() -> Intent {
        let mut extras = Bundle::new();
        extras.put_int(SAMSUNG_STATUS_CODE, 0).put_string(
            SAMSUNG_RESULT_OBJECT,
            r#"{"mItemId":"gems_100","mItemName":"100 Gems","mItemPriceString":"$0.99","mItemDesc":"A pouch of gems","mItemImageUrl":"","mItemDownloadUrl":"","mItemType":"00","mPurchaseDate":"1700000000000","mPurchaseId":"purchase-1","mPaymentId":"payment-1","mVerifyUrl":"https://iap.samsungapps.com/verify?id=purchase-1"}"#,
        );
        Intent::new().put_extras(extras)
    }

    #[tokio::test]
    async fn matching_payment_id_is_valid() {
        let verification = FakeVerification::answering(Some(
            r#"{"status":"true","paymentId":"payment-1","itemId":"gems_100"}"#,
        ));
        let service = service(Arc::new(RecordingHost::default()), verification.clone());

        let outcome = service
            .verify_purchase(&samsung_order(Some("https://verify.example/1")))
            .await
            .unwrap();

        assert!(outcome.is_valid());
        assert_eq!(
            *verification.urls.lock().unwrap(),
            vec!["https://verify.example/1".to_string()]
        );
    }

    #[tokio::test]
    async fn rejected_or_mismatched_purchase_is_invalid() {
        for body in [
            r#"{"status":"false","paymentId":"payment-1"}"#,
            r#"{"status":true,"paymentId":"payment-2"}"#,
        ] {
            let service = service(
                Arc::new(RecordingHost::default()),
                FakeVerification::answering(Some(body)),
            );

            let outcome = service
                .verify_purchase(&samsung_order(Some("https://verify.example/1")))
                .await
                .unwrap();

            assert!(matches!(outcome, VerificationOutcome::Invalid { .. }), "{body}");
        }
    }

    #[tokio::test]
    async fn order_without_verify_url_is_skipped() {
        let verification = FakeVerification::answering(None);
        let service = service(Arc::new(RecordingHost::default()), verification.clone());

        let outcome = service.verify_purchase(&samsung_order(None)).await.unwrap();

        assert_eq!(outcome, VerificationOutcome::Skipped);
        assert!(verification.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_verification_response_is_invalid() {
        let verification = FakeVerification::answering(None);
        let service = service(Arc::new(RecordingHost::default()), verification.clone());

        let outcome = service
            .verify_purchase(&samsung_order(Some("https://verify.example/1")))
            .await
            .unwrap();

        assert!(matches!(outcome, VerificationOutcome::Invalid { .. }));
        assert_eq!(verification.urls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn order_without_payment_id_is_skipped() {
        let verification = FakeVerification::answering(Some(
            r#"{"status":"true","paymentId":"payment-1"}"#,
        ));
        let service = service(Arc::new(RecordingHost::default()), verification.clone());
        let mut order = samsung_order(Some("https://verify.example/1"));
        if let OrderDetails::Samsung { payment_id, .. } = &mut order.details {
            payment_id.clear();
        }

        let outcome = service.verify_purchase(&order).await.unwrap();

        assert_eq!(outcome, VerificationOutcome::Skipped);
        assert!(verification.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn completed_payment_is_decoded_and_verified_in_background() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let service = service(
            Arc::new(RecordingHost::default()),
            FakeVerification::answering(Some(r#"{"status":"true","paymentId":"payment-1"}"#)),
        )
        .with_verification_reports(tx);

        let result = service
            .on_activity_result(
                SAMSUNG_REQUEST_PAYMENT,
                ActivityResult::Ok,
                Some(&payment_result()),
            )
            .unwrap();

        assert!(result.response.is_ok());
        let order = result.order.unwrap();
        assert_eq!(order.order_id, "purchase-1");
        assert_eq!(order.product_id, "gems_100");
        assert_eq!(order.purchase_time.timestamp_millis(), 1_700_000_000_000);
        match &order.details {
            OrderDetails::Samsung {
                description, price, ..
            } => {
                assert_eq!(description, "A pouch of gems");
                assert_eq!(price, "$0.99");
            }
            other => panic!("unexpected details {other:?}"),
        }

        let report = rx.recv().await.unwrap();
        assert_eq!(report.order_id, "purchase-1");
        assert_eq!(report.result.unwrap(), VerificationOutcome::Valid);
    }

    #[test]
    fn other_request_codes_are_ignored() {
        let service = service(
            Arc::new(RecordingHost::default()),
            FakeVerification::answering(None),
        );

        assert!(service
            .on_activity_result(42, ActivityResult::Ok, Some(&payment_result()))
            .is_none());
    }

    #[test]
    fn canceled_payment_reports_status_without_order() {
        let service = service(
            Arc::new(RecordingHost::default()),
            FakeVerification::answering(None),
        );

        let result = service
            .on_activity_result(SAMSUNG_REQUEST_PAYMENT, ActivityResult::Canceled, None)
            .unwrap();

        assert_eq!(result.response, VendorResponse::Samsung(SamsungStatus::Common));
        assert!(result.order.is_none());
    }

    #[test]
    fn account_authorization_requires_genuine_package() {
        let counterfeit = Arc::new(RecordingHost {
            installed: true,
            signature_hash: Some(0x1234),
            ..Default::default()
        });
        assert!(!service(counterfeit.clone(), FakeVerification::answering(None))
            .request_account_authorization()
            .unwrap());
        assert!(counterfeit.started.lock().unwrap().is_empty());

        let genuine = Arc::new(RecordingHost {
            installed: true,
            signature_hash: Some(SAMSUNG_IAP_SIGNATURE_HASH),
            ..Default::default()
        });
        assert!(service(genuine.clone(), FakeVerification::answering(None))
            .request_account_authorization()
            .unwrap());
        let started = genuine.started.lock().unwrap();
        let (intent, request_code) = &started[0];
        assert_eq!(*request_code, Some(SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION));
        assert_eq!(
            intent.component,
            Some(ComponentName::new(SAMSUNG_IAP_PACKAGE, SAMSUNG_ACCOUNT_ACTIVITY))
        );
        assert!(SamsungIabService::is_account_authorized(
            SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION,
            ActivityResult::Ok
        ));
    }

    #[test]
    fn missing_iap_opens_installation_page() {
        let host = Arc::new(RecordingHost::default());
        let service = service(host.clone(), FakeVerification::answering(None));

        assert!(!service.is_iap_installed());
        let started = host.started.lock().unwrap();
        assert_eq!(started[0].0.data.as_deref(), Some(SAMSUNG_INSTALLATION_LINK));
        assert_eq!(started[0].1, None);
    }
}
