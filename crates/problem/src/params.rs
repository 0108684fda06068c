use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::problem::format_value;

/// Ordered map from parameter name to its current value.
///
/// Order is assigned by first-seen name when the map is built and never
/// changes afterwards. Only values can be mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterMap {
    index_of: HashMap<String, usize>,
    names: Vec<String>,
    values: Vec<f64>,
}

impl ParameterMap {
    /// Map with no parameters.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs. A repeated name keeps its first
    /// position and first value.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut index_of = HashMap::new();
        let mut names = Vec::new();
        let mut values = Vec::new();
        for (name, value) in pairs {
            let name = name.into();
            if let std::collections::hash_map::Entry::Vacant(e) =
                index_of.entry(name.clone())
            {
                e.insert(names.len());
                names.push(name);
                values.push(value);
            }
        }
        Self {
            index_of,
            names,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index_of.get(name).map(|&i| self.values[i])
    }

    /// Names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn set(
        &mut self,
        name: &str,
        value: f64,
    ) -> Result<(), ParameterError> {
        let i = self.index_of.get(name).copied().ok_or_else(|| {
            ParameterError::UnknownParameter(name.to_string())
        })?;
        self.values[i] = value;
        Ok(())
    }

    /// Overwrite several values at once. Either every name is known and
    /// all values are written, or nothing changes.
    pub fn update_all<'a, I>(
        &mut self,
        updates: I,
    ) -> Result<(), ParameterError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut resolved = Vec::new();
        for (name, value) in updates {
            let i = self.index_of.get(name).copied().ok_or_else(|| {
                ParameterError::UnknownParameter(name.to_string())
            })?;
            resolved.push((i, value));
        }
        for (i, value) in resolved {
            self.values[i] = value;
        }
        Ok(())
    }
}

impl fmt::Display for ParameterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, format_value(value))?;
        }
        Ok(())
    }
}

impl Serialize for ParameterMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("unknown parameter `{0}`")]
    UnknownParameter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prism() -> ParameterMap {
        ParameterMap::from_pairs([
            ("length", 1.0),
            ("width", 2.0),
            ("height", 3.0),
        ])
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let params = prism();
        let names: Vec<_> = params.names().collect();
        assert_eq!(names, vec!["length", "width", "height"]);
        assert_eq!(params.get("width"), Some(2.0));
        assert_eq!(params.get("depth"), None);
    }

    #[test]
    fn test_repeated_name_keeps_first_value() {
        let params = ParameterMap::from_pairs([
            ("a", 1.0),
            ("b", 2.0),
            ("a", 9.0),
        ]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("a"), Some(1.0));
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_set_unknown_name_is_rejected() {
        let mut params = prism();
        assert_eq!(
            params.set("depth", 4.0),
            Err(ParameterError::UnknownParameter("depth".to_string()))
        );
        params.set("height", 4.0).unwrap();
        assert_eq!(params.get("height"), Some(4.0));
    }

    #[test]
    fn test_update_all_is_all_or_nothing() {
        let mut params = prism();
        let before = params.clone();

        let result = params
            .update_all([("length", 10.0), ("depth", 5.0)]);
        assert!(result.is_err());
        assert_eq!(params, before);

        params
            .update_all([("height", 6.0), ("length", 4.0)])
            .unwrap();
        assert_eq!(params.get("length"), Some(4.0));
        assert_eq!(params.get("width"), Some(2.0));
        assert_eq!(params.get("height"), Some(6.0));
    }

    #[test]
    fn test_display_and_json_follow_insertion_order() {
        let params = prism();
        assert_eq!(params.to_string(), "length=1.0, width=2.0, height=3.0");

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"length":1.0,"width":2.0,"height":3.0}"#);

        assert_eq!(ParameterMap::empty().to_string(), "");
    }
}
