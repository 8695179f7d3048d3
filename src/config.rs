use serde::Deserialize;
use serde_repr::Deserialize_repr;

use crate::errors::BillingError;

pub const IAB_API_VERSION: &str = "IAB_API_VERSION";
pub const IAB_SAMSUNG_MODE: &str = "IAB_SAMSUNG_MODE";
pub const GOOGLE_PLAY_API_KEY: &str = "GOOGLE_PLAY_API_KEY";

/// Operating mode of the Samsung IAP service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize_repr)]
#[repr(i8)]
pub enum SamsungMode {
    #[default]
    Production = 0,
    /// Every payment succeeds without charging.
    TestSuccess = 1,
    /// Every payment fails.
    TestFailure = -1,
}

impl SamsungMode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for SamsungMode {
    type Error = BillingError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SamsungMode::Production),
            1 => Ok(SamsungMode::TestSuccess),
            -1 => Ok(SamsungMode::TestFailure),
            other => Err(BillingError::Config(format!("unknown Samsung mode {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BillingConfig {
    /// In-app billing API version passed to Google Play.
    pub api_version: i32,
    pub samsung_mode: SamsungMode,
    /// First item index requested from Samsung list and inbox queries.
    pub samsung_item_start: i32,
    /// Last item index (inclusive) requested from Samsung list and inbox
    /// queries.
    pub samsung_item_end: i32,
    /// Google service-account key (JSON). Enables server-side verification of
    /// Google purchases.
    pub google_play_api_key: Option<String>,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            api_version: 3,
            samsung_mode: SamsungMode::Production,
            samsung_item_start: 1,
            samsung_item_end: 1000,
            google_play_api_key: None,
        }
    }
}

impl BillingConfig {
    /// Reads the configuration from the environment, loading a `.env` file
    /// first if one is present. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, BillingError> {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        if let Ok(version) = dotenvy::var(IAB_API_VERSION) {
            config.api_version = version.parse().map_err(|e| {
                BillingError::Config(format!("{IAB_API_VERSION} is not a number: {e}"))
            })?;
        }
        if let Ok(mode) = dotenvy::var(IAB_SAMSUNG_MODE) {
            let code = mode.parse::<i32>().map_err(|e| {
                BillingError::Config(format!("{IAB_SAMSUNG_MODE} is not a number: {e}"))
            })?;
            config.samsung_mode = SamsungMode::try_from(code)?;
        }
        config.google_play_api_key = dotenvy::var(GOOGLE_PLAY_API_KEY).ok();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BillingError> {
        if self.samsung_item_start < 1 || self.samsung_item_end < self.samsung_item_start {
            return Err(BillingError::Config(format!(
                "invalid Samsung item range {}..={}",
                self.samsung_item_start, self.samsung_item_end
            )));
        }
        Ok(())
    }
}
