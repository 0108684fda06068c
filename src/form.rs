use problem::{ParameterMap, format_value};
use std::collections::HashMap;

/// Message shown to the user when any field does not hold a number.
pub const INVALID_INPUT_MESSAGE: &str =
    "Please enter valid numeric values for parameters";

/// One labelled text entry bound to a parameter name.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub text: String,
}

/// Input fields generated from a parameter map, one per parameter, in
/// the map's order.
#[derive(Debug, Clone, Default)]
pub struct Form {
    index_of: HashMap<String, usize>,
    fields: Vec<Field>,
}

impl Form {
    pub fn build(parameters: &ParameterMap) -> Self {
        let mut index_of = HashMap::new();
        let mut fields = Vec::with_capacity(parameters.len());
        for (name, value) in parameters.iter() {
            index_of.insert(name.to_string(), fields.len());
            fields.push(Field {
                name: name.to_string(),
                label: field_label(name),
                text: format_value(value),
            });
        }
        Self { index_of, fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.index_of.get(name).map(|&i| &self.fields[i])
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns false if no field has this name.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> bool {
        match self.index_of.get(name) {
            Some(&i) => {
                self.fields[i].text = text.into();
                true
            }
            None => false,
        }
    }

    /// Parse every field. Fails if any single field is not a number,
    /// reporting all offending fields.
    pub fn parse_values(&self) -> Result<Vec<(&str, f64)>, FormError> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut invalid = Vec::new();
        for field in &self.fields {
            match parse_number(&field.text) {
                Some(value) => values.push((field.name.as_str(), value)),
                None => invalid.push(field.name.clone()),
            }
        }
        if invalid.is_empty() {
            Ok(values)
        } else {
            Err(FormError::InvalidNumber { fields: invalid })
        }
    }
}

/// `"length"` becomes `"Length:"`.
pub fn field_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            format!("{}{}:", first.to_uppercase(), rest)
        }
        None => ":".to_string(),
    }
}

pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidNumber { fields: Vec<String> },
}
