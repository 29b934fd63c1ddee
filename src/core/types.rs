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

//! src/core/types.rs
//!
//! Core type definitions for field resolution
//!
//! This module defines the fundamental types used throughout the crate:
//! - `FieldType`: The closed set of semantic field tags (email, tckn, cvv, ...)
//! - `FieldGroup`: Which resolution branch a field type belongs to
//! - `FieldSpec`: A named field paired with its type
//! - `InputType` / `InputMode`: Values written into the `type` and
//!   `inputMode` attributes of a property bag
//!
//! Field type tags are serialised in the same camelCase spelling that form
//! definitions use (`cardNumber`, `expiryDate`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::mask::Mask;

/// Semantic type of a form field
///
/// Determines which mask, pattern and key filter a field is bound to.
/// Unknown tags never fail to parse through `From<&str>`; they degrade to
/// `FieldType::Text`, which resolves to a bare text input.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum FieldType {
    /// Letters (including Turkish letters) and whitespace only
    Alpha,
    /// Email address
    Email,
    /// Password, minimum length enforced
    Password,
    /// Phone number, `(999) 999 99 99`
    Phone,
    /// Turkish national identity number, 11 digits
    Tckn,
    /// Plain text, no constraints
    Text,
    /// Payment card number, four groups of four digits
    CardNumber,
    /// Card expiry date, `MM/YY`
    ExpiryDate,
    /// Card verification value, 3 digits
    Cvv,
    /// http(s) URL
    Url,
}

impl FieldType {
    /// Every member of the enumeration, in declaration order
    pub const ALL: [FieldType; 10] = [
        FieldType::Alpha,
        FieldType::Email,
        FieldType::Password,
        FieldType::Phone,
        FieldType::Tckn,
        FieldType::Text,
        FieldType::CardNumber,
        FieldType::ExpiryDate,
        FieldType::Cvv,
        FieldType::Url,
    ];

    /// Tag used in form definitions (`"cardNumber"`, `"tckn"`, ...)
    pub fn tag(self) -> &'static str {
        match self {
            FieldType::Alpha => "alpha",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Phone => "phone",
            FieldType::Tckn => "tckn",
            FieldType::Text => "text",
            FieldType::CardNumber => "cardNumber",
            FieldType::ExpiryDate => "expiryDate",
            FieldType::Cvv => "cvv",
            FieldType::Url => "url",
        }
    }

    /// Resolution branch this type belongs to
    ///
    /// This is the single table assigning mask templates and input types;
    /// every other lookup derives from it.
    pub fn group(self) -> FieldGroup {
        match self {
            FieldType::Tckn => FieldGroup::MaskedNumeric(Mask::TCKN),
            FieldType::CardNumber => FieldGroup::MaskedNumeric(Mask::CARD_NUMBER),
            FieldType::ExpiryDate => FieldGroup::MaskedNumeric(Mask::EXPIRY_DATE),
            FieldType::Cvv => FieldGroup::MaskedNumeric(Mask::CVV),
            FieldType::Phone => FieldGroup::MaskedNumeric(Mask::PHONE),
            FieldType::Email => FieldGroup::CommonText(InputType::Email),
            FieldType::Password => FieldGroup::CommonText(InputType::Password),
            FieldType::Url => FieldGroup::CommonText(InputType::Url),
            FieldType::Alpha => FieldGroup::Alphabetic,
            FieldType::Text => FieldGroup::Fallback,
        }
    }

    /// Returns true for types resolved through the masking capability
    pub fn is_masked(self) -> bool {
        matches!(self.group(), FieldGroup::MaskedNumeric(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Returned by the strict `FromStr` parse when a tag is not recognised
#[derive(Debug, Error, PartialEq)]
#[error("Unknown field type '{0}'")]
pub struct UnknownFieldType(pub String);

impl FromStr for FieldType {
    type Err = UnknownFieldType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|field_type| field_type.tag() == s)
            .ok_or_else(|| UnknownFieldType(s.to_string()))
    }
}

impl From<&str> for FieldType {
    /// Permissive parse: unknown tags fall back to plain text
    fn from(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|UnknownFieldType(tag)| {
            tracing::debug!(%tag, "unknown field type, falling back to text");
            FieldType::Text
        })
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        FieldType::from(tag.as_str())
    }
}

/// The four disjoint resolution branches
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldGroup {
    /// Masked through `register_with_mask`, digits only
    MaskedNumeric(Mask),
    /// email, password, url; carries the `type` attribute value
    CommonText(InputType),
    /// Letters and whitespace
    Alphabetic,
    /// Bare text input
    Fallback,
}

/// A named field and its semantic type
///
/// # Example
/// ```
/// use form_field_props::core::{FieldSpec, FieldType};
///
/// let field = FieldSpec::new("card", FieldType::CardNumber);
/// assert_eq!(field.to_string(), "card: cardNumber");
/// ```
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name, used as the key of the resolved mapping
    pub name: String,

    /// Semantic type; serialised under `type`
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

impl fmt::Display for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.field_type)
    }
}

/// Value of the `type` attribute
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Url,
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputType::Text => write!(f, "text"),
            InputType::Email => write!(f, "email"),
            InputType::Password => write!(f, "password"),
            InputType::Url => write!(f, "url"),
        }
    }
}

/// Value of the `inputMode` attribute
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputMode {
    /// Numeric on-screen keyboard
    Numeric,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Numeric => write!(f, "numeric"),
        }
    }
}
