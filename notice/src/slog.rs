//! `slog` values for outbound messages and expense reports.
//!
//! A message is logged only after [`crate::Censor::censor`] has run on it, so
//! the forbidden words never reach a drain. Reports are logged as a nested
//! `{kind, recipient, cost}` object. Both go through `slog::Serde`, which
//! needs the `nested-values` feature.
//!
//! A value that fails to become JSON is logged as [`SERIALIZATION_FAILED`].
//! Picking a drain and a format is left to the application.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{Censor, ExpenseReport};

/// Placeholder logged when a value cannot be converted to JSON.
pub const SERIALIZATION_FAILED: &str = "Failed to serialize censored value";

/// A `slog::Value` that emits an owned censored payload as structured JSON.
pub struct CensoredJson {
    value: JsonValue,
}

impl CensoredJson {
    fn new(value: JsonValue) -> Self {
        Self { value }
    }
}

impl SlogValue for CensoredJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts values into a `slog::Value` that logs their censored form as JSON.
///
/// Calling `into_censored_json` consumes the value, masks it with the default
/// word list and stores the result as a `serde_json::Value`.
///
/// ## Example
/// ```ignore
/// use notice::slog::IntoCensoredJson;
///
/// info!(logger, "outbound"; "email" => email.into_censored_json());
/// ```
pub trait IntoCensoredJson: Censor + Serialize + Sized {
    /// Censors `self` and returns a `slog::Value` that serializes as structured JSON.
    ///
    /// If converting to `serde_json::Value` fails, the returned value holds
    /// the JSON string [`SERIALIZATION_FAILED`].
    fn into_censored_json(mut self) -> CensoredJson {
        self.censor();
        let json_value = serde_json::to_value(&self)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZATION_FAILED.to_string()));
        CensoredJson::new(json_value)
    }
}

impl<T> IntoCensoredJson for T where T: Censor + Serialize {}

impl SlogValue for ExpenseReport {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}
