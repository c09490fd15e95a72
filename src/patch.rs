//! Style property maps and the patches that bring a backend node up to date.

use std::borrow::Cow;
use std::collections::HashMap;

/// Formats a length in pixels.
pub(crate) fn px(value: f64) -> String {
    format!("{}px", value)
}

/// An ordered set of CSS-like style properties.
///
/// Setting a key that already exists replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleMap {
    properties: Vec<(Cow<'static, str>, String)>,
}

impl StyleMap {
    pub fn new() -> StyleMap {
        StyleMap::default()
    }

    pub fn set<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Cow<'static, str>>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.properties.push((key, value)),
        }
    }

    /// Adds extension properties.
    pub fn extend(&mut self, extra: &[(String, String)]) {
        for (key, value) in extra {
            self.set(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (&**k, v.as_str()))
    }
}

/// A single property write. An empty value resets the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylePatch {
    pub key: Cow<'static, str>,
    pub value: String,
}

/// Properties as last applied to a backend node. Reset properties are absent, never empty.
pub(crate) type Applied = HashMap<Cow<'static, str>, String>;

/// Computes the writes needed to turn `applied` into `requested`.
///
/// Properties that are no longer requested are reset; unchanged ones produce nothing. An absent
/// property counts as empty, so requesting `""` for it is a no-op.
pub(crate) fn diff(applied: &Applied, requested: &StyleMap) -> Vec<StylePatch> {
    let mut patches = Vec::new();

    for (key, value) in &requested.properties {
        let current = applied.get(&**key).map(String::as_str).unwrap_or("");
        if current != value {
            patches.push(StylePatch {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    let mut stale: Vec<_> = applied
        .iter()
        .filter(|(key, value)| !value.is_empty() && requested.get(key).is_none())
        .map(|(key, _)| key.clone())
        .collect();
    // hash map order is arbitrary
    stale.sort();
    patches.extend(stale.into_iter().map(|key| StylePatch {
        key,
        value: String::new(),
    }));

    patches
}
