//! Field lookup on view models

use crate::FieldValue;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// A view model whose field values can be read by name.
///
/// Full-form validation uses this to fetch the current value of every
/// registered field. Missing fields read as `FieldValue::Null`.
pub trait ViewModel {
    fn field_value(&self, name: &str) -> FieldValue;
}

impl ViewModel for FieldValue {
    fn field_value(&self, name: &str) -> FieldValue {
        self.get(name).cloned().unwrap_or(FieldValue::Null)
    }
}

impl ViewModel for HashMap<String, FieldValue> {
    fn field_value(&self, name: &str) -> FieldValue {
        self.get(name).cloned().unwrap_or(FieldValue::Null)
    }
}

impl ViewModel for BTreeMap<String, FieldValue> {
    fn field_value(&self, name: &str) -> FieldValue {
        self.get(name).cloned().unwrap_or(FieldValue::Null)
    }
}

/// Read a field from any serializable view model.
///
/// Serialization failures and non-object models read as `Null`.
///
/// ```
/// use lcform_core::{ViewModel, FieldValue, serialized_field_value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Customer {
///     fullname: String,
/// }
///
/// impl ViewModel for Customer {
///     fn field_value(&self, name: &str) -> FieldValue {
///         serialized_field_value(self, name)
///     }
/// }
///
/// let customer = Customer { fullname: "john".to_string() };
/// assert_eq!(customer.field_value("fullname"), "john");
/// ```
pub fn serialized_field_value<T: Serialize + ?Sized>(vm: &T, name: &str) -> FieldValue {
    match serde_json::to_value(vm) {
        Ok(FieldValue::Object(mut map)) => map.remove(name).unwrap_or(FieldValue::Null),
        _ => FieldValue::Null,
    }
}
