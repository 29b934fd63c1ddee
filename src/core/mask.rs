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

//! Input mask templates
//!
//! A mask template is a string where the placeholder character `9` marks a
//! digit slot and every other character is a literal inserted into the
//! displayed value. `"9999 9999 9999 9999"` has 16 slots and 3 literals.
//!
//! # Masking
//! `Mask::apply` walks the template left to right, consuming one clean
//! character per slot and copying literals verbatim, and stops as soon as the
//! clean value is exhausted. Partial input therefore never ends in a
//! dangling literal:
//!
//! ```
//! use form_field_props::core::Mask;
//!
//! let mask = Mask::CARD_NUMBER;
//! assert_eq!(mask.apply("411111"), "4111 11");
//! assert_eq!(mask.apply("4111"), "4111");
//! ```

use serde::Serialize;
use std::fmt;

use crate::core::types::{FieldGroup, FieldType};

/// Character marking a digit slot in a template
pub const PLACEHOLDER: char = '9';

/// A fixed mask template
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mask(&'static str);

impl Mask {
    pub const TCKN: Mask = Mask("99999999999");
    pub const CARD_NUMBER: Mask = Mask("9999 9999 9999 9999");
    pub const EXPIRY_DATE: Mask = Mask("99/99");
    pub const CVV: Mask = Mask("999");
    pub const PHONE: Mask = Mask("(999) 999 99 99");

    /// Template for a masked-numeric field type, `None` for all others
    pub fn for_type(field_type: FieldType) -> Option<Mask> {
        match field_type.group() {
            FieldGroup::MaskedNumeric(mask) => Some(mask),
            FieldGroup::CommonText(_) | FieldGroup::Alphabetic | FieldGroup::Fallback => None,
        }
    }

    /// The raw template string
    pub fn template(&self) -> &'static str {
        self.0
    }

    /// Number of digit slots; used as `maxLength` since the input holds the
    /// unmasked value
    pub fn slot_count(&self) -> usize {
        self.0.chars().filter(|&c| c == PLACEHOLDER).count()
    }

    /// Length of a fully masked value
    pub fn display_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Masks `value`, stripping it to its clean form first
    ///
    /// Clean characters beyond the last slot are dropped.
    pub fn apply(&self, value: &str) -> String {
        let clean = strip(value);
        let mut digits = clean.chars().peekable();
        let mut masked = String::with_capacity(self.0.len());

        for slot in self.0.chars() {
            if digits.peek().is_none() {
                break;
            }

            if slot == PLACEHOLDER {
                if let Some(digit) = digits.next() {
                    masked.push(digit);
                }
            } else {
                masked.push(slot);
            }
        }

        masked
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Removes every non-digit character
pub fn strip(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Options handed to the masking capability
///
/// The defaults are the fixed record every masked field is registered with:
/// no mask preview on focus or hover, auto-unmask on, empty placeholder.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskOptions {
    pub show_mask_on_focus: bool,
    pub show_mask_on_hover: bool,
    /// Expose the clean value instead of the displayed one
    pub auto_unmask: bool,
    pub placeholder: String,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            show_mask_on_focus: false,
            show_mask_on_hover: false,
            auto_unmask: true,
            placeholder: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_count_ignores_literals() {
        assert_eq!(Mask::CARD_NUMBER.slot_count(), 16);
        assert_eq!(Mask::CARD_NUMBER.display_len(), 19);
        assert_eq!(Mask::PHONE.slot_count(), 10);
        assert_eq!(Mask::EXPIRY_DATE.slot_count(), 4);
    }

    #[test]
    fn test_default_options() {
        let options = MaskOptions::default();
        assert!(!options.show_mask_on_focus);
        assert!(!options.show_mask_on_hover);
        assert!(options.auto_unmask);
        assert!(options.placeholder.is_empty());
    }

    #[test]
    fn test_only_masked_types_have_templates() {
        for field_type in FieldType::ALL {
            assert_eq!(Mask::for_type(field_type).is_some(), field_type.is_masked());
        }
    }
}
