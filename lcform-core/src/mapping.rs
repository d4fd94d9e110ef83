// Form field name to view-model attribute mappings

use serde::{Deserialize, Serialize};

/// Association between a UI-facing field name and a view-model attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormNameToFieldNameMapping {
    pub form_field_name: String,
    pub vm_field_name: String,
}

impl FormNameToFieldNameMapping {
    pub fn new(form_field_name: impl Into<String>, vm_field_name: impl Into<String>) -> Self {
        Self {
            form_field_name: form_field_name.into(),
            vm_field_name: vm_field_name.into(),
        }
    }
}

/// Ordered collection of mappings. The first mapping for a name wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMappings {
    mappings: Vec<FormNameToFieldNameMapping>,
}

impl FieldMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping
    pub fn add(&mut self, mapping: FormNameToFieldNameMapping) {
        self.mappings.push(mapping);
    }

    /// View-model attribute for a form field name
    pub fn vm_field_name(&self, form_field_name: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.form_field_name == form_field_name)
            .map(|m| m.vm_field_name.as_str())
    }

    /// Form field name for a view-model attribute
    pub fn form_field_name(&self, vm_field_name: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.vm_field_name == vm_field_name)
            .map(|m| m.form_field_name.as_str())
    }

    /// View-model attribute for a form field, falling back to the name itself
    pub fn resolve<'a>(&'a self, form_field_name: &'a str) -> &'a str {
        self.vm_field_name(form_field_name).unwrap_or(form_field_name)
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FormNameToFieldNameMapping> {
        self.mappings.iter()
    }
}

impl From<Vec<FormNameToFieldNameMapping>> for FieldMappings {
    fn from(mappings: Vec<FormNameToFieldNameMapping>) -> Self {
        Self { mappings }
    }
}
