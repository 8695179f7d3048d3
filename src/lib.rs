pub(crate) mod data {
    pub(crate) mod datasources {
        pub(crate) mod google_play_billing_datasource;
        pub(crate) mod google_play_developer_api_datasource;
        pub(crate) mod samsung_iap_datasource;
        pub(crate) mod samsung_verification_datasource;
        mod utils;
    }
    pub(crate) mod models {
        pub(crate) mod google_play_billing {
            pub(crate) mod purchase_data_model;
            pub(crate) mod sku_details_model;
        }
        pub(crate) mod google_play_developer_api {
            pub(crate) mod product_purchase_model;
            pub(crate) mod subscription_purchase_v2_model;
        }
        pub(crate) mod samsung_iap {
            pub(crate) mod item_model;
            pub(crate) mod purchase_model;
            pub(crate) mod verification_model;
        }
    }
    pub mod repositories {
        pub mod billing_manager;
        pub mod google_iab_service_impl;
        pub mod samsung_iab_service_impl;
    }
}

pub mod domain {
    pub mod entities {
        pub mod order;
        pub mod product_type;
        pub mod purchasable;
        pub mod query_result;
        pub mod response_code;
        pub mod verification;
    }
    pub mod repositories {
        pub mod iab_service;
    }
}

pub mod platform {
    pub mod bundle;
    pub(crate) mod connection;
    pub mod host;
    pub mod intent;
    pub mod remote;

    pub use connection::ConnectionWatcher;
}

pub mod config;
pub(crate) mod constants;
pub mod errors;
pub mod util;

pub use constants::{
    GOOGLE_REQUEST_PURCHASE, SAMSUNG_REQUEST_ACCOUNT_AUTHORIZATION, SAMSUNG_REQUEST_PAYMENT,
};
pub use data::repositories::{
    billing_manager::BillingManager,
    google_iab_service_impl::GoogleIabService,
    samsung_iab_service_impl::{SamsungIabService, SamsungInit},
};
