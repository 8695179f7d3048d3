// Google Play in-app billing (IInAppBillingService, API v3).
// ----------------------------

pub(crate) const GOOGLE_BILLING_ACTION: &str = "com.android.vending.billing.InAppBIND";
pub(crate) const GOOGLE_BILLING_PACKAGE: &str = "com.android.vending";

pub(crate) const GOOGLE_PURCHASE_TYPE_INAPP: &str = "inapp";
pub(crate) const GOOGLE_PURCHASE_TYPE_SUBSCRIPTION: &str = "subs";

pub(crate) const GOOGLE_RESPONSE_CODE: &str = "RESPONSE_CODE";
pub(crate) const GOOGLE_ITEM_ID_LIST: &str = "ITEM_ID_LIST";
pub(crate) const GOOGLE_DETAILS_LIST: &str = "DETAILS_LIST";
pub(crate) const GOOGLE_BUY_INTENT: &str = "BUY_INTENT";
pub(crate) const GOOGLE_INAPP_PURCHASE_DATA: &str = "INAPP_PURCHASE_DATA";
pub(crate) const GOOGLE_INAPP_PURCHASE_DATA_LIST: &str = "INAPP_PURCHASE_DATA_LIST";
pub(crate) const GOOGLE_INAPP_CONTINUATION_TOKEN: &str = "INAPP_CONTINUATION_TOKEN";

/// Request code used by `GoogleIabService` purchase flows.
pub const GOOGLE_REQUEST_PURCHASE: i32 = 1001;

pub(crate) const GOOGLE_PLAY_DEVELOPER_API_SCOPE: &str =
    "https://www.googleapis.com/auth/androidpublisher";

// Samsung IAP (IAPConnector).
// ----------------------------

pub(crate) const SAMSUNG_IAP_PACKAGE: &str = "com.sec.android.iap";
pub(crate) const SAMSUNG_IAP_SERVICE: &str = "com.sec.android.iap.service.iapService";
pub(crate) const SAMSUNG_PAYMENT_ACTIVITY: &str =
    "com.sec.android.iap.activity.PaymentMethodListActivity";
pub(crate) const SAMSUNG_ACCOUNT_ACTIVITY: &str = "com.sec.android.iap.activity.AccountActivity";
pub(crate) const SAMSUNG_INSTALLATION_LINK: &str =
    "samsungapps://ProductDetail/com.sec.android.iap";

/// Hash of the signing certificate of the genuine Samsung IAP package.
pub(crate) const SAMSUNG_IAP_SIGNATURE_HASH: i32 = 0x7a7eaf4b;

/// Request code of the Samsung payment activity.
pub const SAMSUNG_REQUEST_PAYMENT: i32 = 1000;
/// Request code of the Samsung account authorization activity.
pub const SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION: i32 = 1001;

pub(crate) const SAMSUNG_STATUS_CODE: &str = "STATUS_CODE";
pub(crate) const SAMSUNG_ERROR_STRING: &str = "ERROR_STRING";
pub(crate) const SAMSUNG_UPGRADE_URL: &str = "IAP_UPGRADE_URL";
pub(crate) const SAMSUNG_RESULT_LIST: &str = "RESULT_LIST";
pub(crate) const SAMSUNG_RESULT_OBJECT: &str = "RESULT_OBJECT";
pub(crate) const SAMSUNG_THIRD_PARTY_NAME: &str = "THIRD_PARTY_NAME";
pub(crate) const SAMSUNG_ITEM_GROUP_ID: &str = "ITEM_GROUP_ID";
pub(crate) const SAMSUNG_ITEM_ID: &str = "ITEM_ID";

pub(crate) const SAMSUNG_INBOX_DATE_FORMAT: &str = "%Y%m%d";
pub(crate) const SAMSUNG_INBOX_START_DATE: &str = "19700101";

// Platform.
// ----------------------------

pub(crate) const ACTION_MAIN: &str = "android.intent.action.MAIN";
pub(crate) const ACTION_VIEW: &str = "android.intent.action.VIEW";
pub(crate) const CATEGORY_LAUNCHER: &str = "android.intent.category.LAUNCHER";

pub(crate) const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;
pub(crate) const FLAG_ACTIVITY_CLEAR_TOP: i32 = 0x0400_0000;
pub(crate) const FLAG_INCLUDE_STOPPED_PACKAGES: i32 = 0x0000_0020;
