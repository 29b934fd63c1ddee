// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property bags
//!
//! A `PropertyBag` maps attribute names (`type`, `maxLength`, `onKeyDown`,
//! ...) to values applied to a single input. Bags are combined with an
//! explicit ordered merge: `base.merge(overlay)` keeps every base entry and
//! lets the overlay win on key collisions.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::core::keys::KeyFilter;

/// Attribute names written by the resolver
pub mod attr {
    pub const TYPE: &str = "type";
    pub const INPUT_MODE: &str = "inputMode";
    pub const MAX_LENGTH: &str = "maxLength";
    pub const MIN_LENGTH: &str = "minLength";
    pub const PATTERN: &str = "pattern";
    pub const ON_KEY_DOWN: &str = "onKeyDown";
    pub const VALUE: &str = "value";
    pub const MASKED_VALUE: &str = "maskedValue";
}

/// A single attribute value
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Text(String),
    Number(usize),
    Flag(bool),
    /// Key-down interceptor
    KeyDown(KeyFilter),
    /// Opaque handle returned by a capability (ref, change handler id, ...)
    Token(String),
}

impl PropValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<usize> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_key_filter(&self) -> Option<KeyFilter> {
        match self {
            PropValue::KeyDown(filter) => Some(*filter),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(text) => write!(f, "{:?}", text),
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::Flag(b) => write!(f, "{}", b),
            PropValue::KeyDown(filter) => write!(f, "<{} filter>", filter),
            PropValue::Token(token) => write!(f, "<{}>", token),
        }
    }
}

impl From<&str> for PropValue {
    fn from(text: &str) -> Self {
        PropValue::Text(text.to_string())
    }
}

impl From<String> for PropValue {
    fn from(text: String) -> Self {
        PropValue::Text(text)
    }
}

impl From<usize> for PropValue {
    fn from(n: usize) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Flag(b)
    }
}

impl From<KeyFilter> for PropValue {
    fn from(filter: KeyFilter) -> Self {
        PropValue::KeyDown(filter)
    }
}

/// Attributes for one input, sorted by name
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PropertyBag {
    props: BTreeMap<String, PropValue>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: &str, value: impl Into<PropValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts or replaces an attribute, returning the previous value
    pub fn insert(&mut self, name: &str, value: impl Into<PropValue>) -> Option<PropValue> {
        self.props.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.props.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Merges `overlay` on top of `self`; overlay entries win on collision
    pub fn merge(mut self, overlay: PropertyBag) -> Self {
        self.props.extend(overlay.props);
        self
    }
}

/// Resolved bags keyed by field name
pub type FieldProps = HashMap<String, PropertyBag>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_wins_on_collision() {
        let base = PropertyBag::new()
            .with("name", "email")
            .with(attr::TYPE, "hidden");
        let overlay = PropertyBag::new().with(attr::TYPE, "email");

        let merged = base.merge(overlay);
        assert_eq!(merged.get(attr::TYPE), Some(&PropValue::from("email")));
        assert_eq!(merged.get("name"), Some(&PropValue::from("email")));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_serialises_untagged() {
        let bag = PropertyBag::new()
            .with(attr::MAX_LENGTH, 16usize)
            .with(attr::ON_KEY_DOWN, KeyFilter::Digits)
            .with("required", true);

        let json = serde_json::to_value(&bag).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"maxLength": 16, "onKeyDown": "digits", "required": true})
        );
    }
}
