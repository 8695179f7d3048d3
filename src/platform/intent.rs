use super::bundle::Bundle;

/// Opaque handle to an intent sender created by a vendor service, e.g. the
/// `BUY_INTENT` returned by Google Play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingIntent(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    pub package: String,
    pub class: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    pub action: Option<String>,
    /// Restricts resolution to a single package, as required when binding to
    /// vendor services.
    pub package: Option<String>,
    pub component: Option<ComponentName>,
    pub data: Option<String>,
    pub categories: Vec<String>,
    pub flags: i32,
    pub extras: Bundle,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_action(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    pub fn set_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn set_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    pub fn set_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    pub fn add_category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn add_flags(mut self, flags: i32) -> Self {
        self.flags |= flags;
        self
    }

    pub fn put_extras(mut self, extras: Bundle) -> Self {
        self.extras = extras;
        self
    }
}

/// Result code delivered to the host's activity-result callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityResult {
    Ok,
    Canceled,
    Other(i32),
}

impl ActivityResult {
    pub const RESULT_OK: i32 = -1;
    pub const RESULT_CANCELED: i32 = 0;

    pub fn code(&self) -> i32 {
        match self {
            ActivityResult::Ok => Self::RESULT_OK,
            ActivityResult::Canceled => Self::RESULT_CANCELED,
            ActivityResult::Other(code) => *code,
        }
    }
}

impl From<i32> for ActivityResult {
    fn from(code: i32) -> Self {
        match code {
            Self::RESULT_OK => ActivityResult::Ok,
            Self::RESULT_CANCELED => ActivityResult::Canceled,
            other => ActivityResult::Other(other),
        }
    }
}
