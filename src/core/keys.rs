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

//! Key-down interceptors
//!
//! A `KeyFilter` inspects the key of a single keystroke and prevents the
//! default action when the key is not allowed. Only the live key is
//! examined, never the field's current value, so filtering is constant time.
//!
//! Navigation keys are always allowed so the user can still edit and move
//! the caret inside a filtered field.

use serde::Serialize;
use std::fmt;

use crate::core::patterns;

/// Keys allowed by every filter
pub const NAVIGATION_KEYS: &[&str] = &[
    "Backspace",
    "Delete",
    "Tab",
    "ArrowLeft",
    "ArrowRight",
    "Home",
    "End",
];

/// Returns true for caret movement and deletion keys
pub fn is_navigation_key(key: &str) -> bool {
    NAVIGATION_KEYS.contains(&key)
}

/// A keystroke delivered to an interceptor
///
/// Mirrors the two members of a DOM keyboard event an interceptor touches.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyDown {
    /// Key value, e.g. `"a"`, `"5"`, `"ArrowLeft"`
    pub key: String,
    default_prevented: bool,
}

impl KeyDown {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Key-down interceptor attached to a field
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFilter {
    /// Single ASCII digits only
    Digits,
    /// Keys matching the alphabetic pattern
    Alpha,
}

impl KeyFilter {
    /// Returns true if `key` may reach the input
    pub fn allows(self, key: &str) -> bool {
        if is_navigation_key(key) {
            return true;
        }

        match self {
            KeyFilter::Digits => {
                let mut chars = key.chars();
                matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_digit())
            }
            KeyFilter::Alpha => patterns::is_alpha(key),
        }
    }

    /// Prevents the default action of `event` if its key is not allowed
    pub fn on_key_down(self, event: &mut KeyDown) {
        if !self.allows(&event.key) {
            tracing::trace!(filter = %self, key = %event.key, "keystroke blocked");
            event.prevent_default();
        }
    }
}

impl fmt::Display for KeyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFilter::Digits => write!(f, "digits"),
            KeyFilter::Alpha => write!(f, "alpha"),
        }
    }
}
