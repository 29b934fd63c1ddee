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

use crate::core::mask::{strip, Mask};
use crate::core::resolver::{clean_value, masked_value};
use crate::core::types::FieldType;

#[test]
fn test_card_number_masking() {
    let masked = Mask::CARD_NUMBER.apply("4111111111111111");
    assert_eq!(masked, "4111 1111 1111 1111");
}

#[test]
fn test_masking_is_idempotent() {
    let masked = Mask::CARD_NUMBER.apply("4111111111111111");
    let remasked = Mask::CARD_NUMBER.apply(&strip(&masked));
    assert_eq!(remasked, masked);

    // Applying directly to a masked value strips first
    assert_eq!(Mask::CARD_NUMBER.apply(&masked), masked);
}

#[test]
fn test_partial_value_stops_before_literal() {
    assert_eq!(Mask::PHONE.apply(""), "");
    assert_eq!(Mask::PHONE.apply("5"), "(5");
    assert_eq!(Mask::PHONE.apply("555"), "(555");
    assert_eq!(Mask::PHONE.apply("5551"), "(555) 1");
    assert_eq!(Mask::PHONE.apply("5551234567"), "(555) 123 45 67");
}

#[test]
fn test_excess_digits_are_dropped() {
    assert_eq!(Mask::CVV.apply("12345"), "123");
    assert_eq!(Mask::EXPIRY_DATE.apply("122999"), "12/29");
}

#[test]
fn test_strip_removes_everything_but_digits() {
    assert_eq!(strip("(555) 123 45 67"), "5551234567");
    assert_eq!(strip("12/29"), "1229");
    assert_eq!(strip("abc"), "");
}

#[test]
fn test_clean_value_only_strips_masked_types() {
    assert_eq!(clean_value(FieldType::Tckn, "123-456"), "123456");
    assert_eq!(clean_value(FieldType::Email, "a1@b2.com"), "a1@b2.com");
}

#[test]
fn test_masked_value_passes_through_unmasked_types() {
    assert_eq!(masked_value(FieldType::Alpha, "Ömer"), "Ömer");
    assert_eq!(masked_value(FieldType::ExpiryDate, "1229"), "12/29");
}
