#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use fractic_iab::platform::{
    bundle::Bundle,
    host::{HostActivity, ServiceConnector},
    intent::{Intent, PendingIntent},
    remote::{IapConnector, InAppBillingService, RemoteError},
};

pub const PACKAGE_NAME: &str = "com.example.app";

pub fn purchase_json(order_id: &str, product_id: &str, token: &str) -> String {
    format!(
        r#"{{"orderId":"{order_id}","packageName":"{PACKAGE_NAME}","productId":"{product_id}","purchaseTime":1700000000000,"purchaseState":0,"developerPayload":"payload","purchaseToken":"{token}"}}"#
    )
}

pub fn sku_json(product_id: &str, price: &str) -> String {
    format!(
        r#"{{"productId":"{product_id}","type":"inapp","price":"{price}","title":"Title of {product_id}","description":"Description of {product_id}"}}"#
    )
}

pub fn response(code: i32) -> Bundle {
    let mut bundle = Bundle::new();
    bundle.put_int("RESPONSE_CODE", code);
    bundle
}

// Host.
// ----------------------------

#[derive(Default)]
pub struct FakeHost {
    pub launched_intent_senders: Mutex<Vec<(PendingIntent, i32)>>,
    pub started_for_result: Mutex<Vec<(Intent, i32)>>,
    pub started: Mutex<Vec<Intent>>,
    /// When set, launching an intent sender fails with this message.
    pub launch_error: Mutex<Option<String>>,
}

impl HostActivity for FakeHost {
    fn package_name(&self) -> &str {
        PACKAGE_NAME
    }

    fn start_intent_sender_for_result(
        &self,
        intent: &PendingIntent,
        request_code: i32,
    ) -> Result<(), String> {
        if let Some(e) = self.launch_error.lock().unwrap().clone() {
            return Err(e);
        }
        self.launched_intent_senders
            .lock()
            .unwrap()
            .push((intent.clone(), request_code));
        Ok(())
    }

    fn start_activity_for_result(&self, intent: Intent, request_code: i32) -> Result<(), String> {
        self.started_for_result
            .lock()
            .unwrap()
            .push((intent, request_code));
        Ok(())
    }

    fn start_activity(&self, intent: Intent) -> Result<(), String> {
        self.started.lock().unwrap().push(intent);
        Ok(())
    }

    fn is_package_installed(&self, _package_name: &str) -> bool {
        true
    }

    fn package_signature_hash(&self, _package_name: &str) -> Option<i32> {
        None
    }
}

// Connector.
// ----------------------------

/// Hands out the same service on every bind and counts binds and unbinds.
pub struct FakeConnector<S: ?Sized> {
    service: Arc<S>,
    pub bound_intents: Mutex<Vec<Intent>>,
    pub unbinds: AtomicUsize,
}

impl<S: ?Sized> FakeConnector<S> {
    pub fn new(service: Arc<S>) -> Arc<Self> {
        Arc::new(Self {
            service,
            bound_intents: Mutex::new(Vec::new()),
            unbinds: AtomicUsize::new(0),
        })
    }

    pub fn unbind_count(&self) -> usize {
        self.unbinds.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: ?Sized + Send + Sync> ServiceConnector<S> for FakeConnector<S> {
    async fn bind(&self, intent: &Intent) -> Result<Arc<S>, RemoteError> {
        self.bound_intents.lock().unwrap().push(intent.clone());
        Ok(self.service.clone())
    }

    async fn unbind(&self) {
        self.unbinds.fetch_add(1, Ordering::SeqCst);
    }
}

// Google Play billing service.
// ----------------------------

/// Answers with preconfigured bundles and records every call.
#[derive(Default)]
pub struct FakeBillingService {
    pub sku_details: Mutex<Option<Bundle>>,
    pub purchase_pages: Mutex<VecDeque<Bundle>>,
    pub buy_intent: Mutex<Option<Bundle>>,
    pub consume_code: Mutex<i32>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBillingService {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl InAppBillingService for FakeBillingService {
    async fn get_sku_details(
        &self,
        api_version: i32,
        package_name: &str,
        purchase_type: &str,
        sku_bundle: &Bundle,
    ) -> Result<Bundle, RemoteError> {
        let ids = sku_bundle
            .get_string_list("ITEM_ID_LIST")
            .unwrap_or_default()
            .join(",");
        self.record(format!(
            "getSkuDetails({api_version},{package_name},{purchase_type},[{ids}])"
        ));
        Ok(self.sku_details.lock().unwrap().clone().unwrap_or_default())
    }

    async fn get_purchases(
        &self,
        api_version: i32,
        package_name: &str,
        purchase_type: &str,
        continuation_token: Option<&str>,
    ) -> Result<Bundle, RemoteError> {
        self.record(format!(
            "getPurchases({api_version},{package_name},{purchase_type},{})",
            continuation_token.unwrap_or("-")
        ));
        self.purchase_pages
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| RemoteError("no more pages".to_string()))
    }

    async fn get_buy_intent(
        &self,
        api_version: i32,
        package_name: &str,
        sku: &str,
        purchase_type: &str,
        developer_payload: Option<&str>,
    ) -> Result<Bundle, RemoteError> {
        self.record(format!(
            "getBuyIntent({api_version},{package_name},{sku},{purchase_type},{})",
            developer_payload.unwrap_or("-")
        ));
        Ok(self.buy_intent.lock().unwrap().clone().unwrap_or_default())
    }

    async fn consume_purchase(
        &self,
        api_version: i32,
        package_name: &str,
        purchase_token: &str,
    ) -> Result<i32, RemoteError> {
        self.record(format!(
            "consumePurchase({api_version},{package_name},{purchase_token})"
        ));
        Ok(*self.consume_code.lock().unwrap())
    }
}

// Samsung IAP connector.
// ----------------------------

#[derive(Default)]
pub struct FakeIapConnector {
    pub init_response: Mutex<Option<Bundle>>,
    /// Keyed by item type code.
    pub item_lists: Mutex<Vec<(String, Bundle)>>,
    pub inbox: Mutex<Option<Bundle>>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeIapConnector {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IapConnector for FakeIapConnector {
    async fn init(&self, mode: i32) -> Result<Bundle, RemoteError> {
        self.calls.lock().unwrap().push(format!("init({mode})"));
        Ok(self.init_response.lock().unwrap().clone().unwrap_or_default())
    }

    async fn get_item_list(
        &self,
        mode: i32,
        package_name: &str,
        item_group_id: &str,
        start_num: i32,
        end_num: i32,
        item_type: &str,
    ) -> Result<Bundle, RemoteError> {
        self.calls.lock().unwrap().push(format!(
            "getItemList({mode},{package_name},{item_group_id},{start_num},{end_num},{item_type})"
        ));
        Ok(self
            .item_lists
            .lock()
            .unwrap()
            .iter()
            .find(|(code, _)| code == item_type)
            .map(|(_, bundle)| bundle.clone())
            .unwrap_or_default())
    }

    async fn get_items_inbox(
        &self,
        package_name: &str,
        item_group_id: &str,
        start_num: i32,
        end_num: i32,
        start_date: &str,
        end_date: &str,
    ) -> Result<Bundle, RemoteError> {
        self.calls.lock().unwrap().push(format!(
            "getItemsInbox({package_name},{item_group_id},{start_num},{end_num},{start_date},{end_date})"
        ));
        Ok(self.inbox.lock().unwrap().clone().unwrap_or_default())
    }
}
