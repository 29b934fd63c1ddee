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

//! Validation pattern definitions
//!
//! Pattern sources are exposed verbatim as the `pattern` attribute of a
//! property bag, so they are written in the dialect browsers accept. The
//! compiled forms are used for key filtering and value checks.
//!
//! Masked-numeric patterns describe the *unmasked* value: the masking
//! capability auto-unmasks, so the value the form sees is digits only.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::types::FieldType;

/// Letters (ASCII plus Turkish) and whitespace
pub const ALPHA: &str = r"^[a-zA-ZğüşıöçĞÜŞİÖÇ\s]+$";

pub const EMAIL: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

/// Matched case-insensitively
pub const URL: &str = r"^https?:\/\/(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&//=]*)$";

pub const TCKN: &str = r"^\d{11}$";

pub const CARD_NUMBER: &str = r"^\d{16}$";

/// Month 01-12 followed by a two digit year
pub const EXPIRY_DATE: &str = r"^(0[1-9]|1[0-2])\d{2}$";

pub const CVV: &str = r"^\d{3}$";

#[allow(clippy::expect_used)]
static ALPHA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ALPHA).expect("alpha pattern should be valid regex"));

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL).expect("email pattern should be valid regex"));

#[allow(clippy::expect_used)]
static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){URL}")).expect("url pattern should be valid regex")
});

#[allow(clippy::expect_used)]
static TCKN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TCKN).expect("tckn pattern should be valid regex"));

#[allow(clippy::expect_used)]
static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CARD_NUMBER).expect("card number pattern should be valid regex"));

#[allow(clippy::expect_used)]
static EXPIRY_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXPIRY_DATE).expect("expiry date pattern should be valid regex"));

#[allow(clippy::expect_used)]
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CVV).expect("cvv pattern should be valid regex"));

/// Pattern source written into the `pattern` attribute, if the type has one
///
/// Phone has no pattern: national formats vary. Password relies on
/// `minLength` instead.
pub fn pattern_source(field_type: FieldType) -> Option<&'static str> {
    match field_type {
        FieldType::Alpha => Some(ALPHA),
        FieldType::Email => Some(EMAIL),
        FieldType::Url => Some(URL),
        FieldType::Tckn => Some(TCKN),
        FieldType::CardNumber => Some(CARD_NUMBER),
        FieldType::ExpiryDate => Some(EXPIRY_DATE),
        FieldType::Cvv => Some(CVV),
        FieldType::Phone | FieldType::Password | FieldType::Text => None,
    }
}

/// Compiled pattern for a field type
pub fn compiled(field_type: FieldType) -> Option<&'static Regex> {
    let regex: &'static LazyLock<Regex> = match field_type {
        FieldType::Alpha => &ALPHA_RE,
        FieldType::Email => &EMAIL_RE,
        FieldType::Url => &URL_RE,
        FieldType::Tckn => &TCKN_RE,
        FieldType::CardNumber => &CARD_NUMBER_RE,
        FieldType::ExpiryDate => &EXPIRY_DATE_RE,
        FieldType::Cvv => &CVV_RE,
        FieldType::Phone | FieldType::Password | FieldType::Text => return None,
    };

    Some(LazyLock::force(regex))
}

/// Checks a value the way the browser checks the `pattern` attribute
///
/// Types without a pattern accept any value. For masked types pass the
/// clean (unmasked) value.
pub fn matches(field_type: FieldType, value: &str) -> bool {
    compiled(field_type).is_none_or(|regex| regex.is_match(value))
}

/// Returns true if `input` consists solely of alphabetic pattern characters
pub fn is_alpha(input: &str) -> bool {
    ALPHA_RE.is_match(input)
}
