use std::collections::HashMap;

use super::intent::PendingIntent;

/// Typed value stored in a [`Bundle`].
#[derive(Debug, Clone, PartialEq)]
pub enum BundleValue {
    Int(i32),
    Long(i64),
    String(String),
    StringList(Vec<String>),
    PendingIntent(PendingIntent),
}

/// String-keyed container of typed values exchanged with vendor services.
///
/// Getters return `None` both for missing keys and for keys holding a value
/// of a different type, which matches how the platform's bundle behaves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bundle {
    values: HashMap<String, BundleValue>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_int(&mut self, key: impl Into<String>, value: i32) -> &mut Self {
        self.values.insert(key.into(), BundleValue::Int(value));
        self
    }

    pub fn put_long(&mut self, key: impl Into<String>, value: i64) -> &mut Self {
        self.values.insert(key.into(), BundleValue::Long(value));
        self
    }

    pub fn put_string(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values
            .insert(key.into(), BundleValue::String(value.into()));
        self
    }

    pub fn put_string_list(&mut self, key: impl Into<String>, value: Vec<String>) -> &mut Self {
        self.values
            .insert(key.into(), BundleValue::StringList(value));
        self
    }

    pub fn put_pending_intent(
        &mut self,
        key: impl Into<String>,
        value: PendingIntent,
    ) -> &mut Self {
        self.values
            .insert(key.into(), BundleValue::PendingIntent(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&BundleValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_int(&self, key: &str) -> Option<i32> {
        match self.values.get(key) {
            Some(BundleValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int_or(&self, key: &str, default: i32) -> i32 {
        self.get_int(key).unwrap_or(default)
    }

    pub fn get_long(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(BundleValue::Long(v)) => Some(*v),
            Some(BundleValue::Int(v)) => Some(*v as i64),
            _ => None,
        }
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(BundleValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    pub fn get_string_list(&self, key: &str) -> Option<&[String]> {
        match self.values.get(key) {
            Some(BundleValue::StringList(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    pub fn get_pending_intent(&self, key: &str) -> Option<&PendingIntent> {
        match self.values.get(key) {
            Some(BundleValue::PendingIntent(v)) => Some(v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
