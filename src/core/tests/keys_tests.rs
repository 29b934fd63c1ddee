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

use crate::core::keys::{is_navigation_key, KeyDown, KeyFilter, NAVIGATION_KEYS};

/// Runs `filter` on a fresh event and reports whether it was prevented
fn blocked(filter: KeyFilter, key: &str) -> bool {
    let mut event = KeyDown::new(key);
    filter.on_key_down(&mut event);
    event.default_prevented()
}

#[test]
fn test_alpha_blocks_digits() {
    assert!(blocked(KeyFilter::Alpha, "5"));
}

#[test]
fn test_alpha_allows_letters() {
    assert!(!blocked(KeyFilter::Alpha, "a"));
    assert!(!blocked(KeyFilter::Alpha, "Z"));
    assert!(!blocked(KeyFilter::Alpha, "ş"));
    assert!(!blocked(KeyFilter::Alpha, "İ"));
    assert!(!blocked(KeyFilter::Alpha, " "));
}

#[test]
fn test_alpha_allows_backspace() {
    assert!(!blocked(KeyFilter::Alpha, "Backspace"));
    assert!(!blocked(KeyFilter::Alpha, "ArrowLeft"));
}

#[test]
fn test_alpha_blocks_punctuation() {
    assert!(blocked(KeyFilter::Alpha, "@"));
    assert!(blocked(KeyFilter::Alpha, "-"));
}

#[test]
fn test_digits_blocks_letters() {
    assert!(blocked(KeyFilter::Digits, "a"));
    assert!(blocked(KeyFilter::Digits, " "));
    assert!(blocked(KeyFilter::Digits, "F1"));
}

#[test]
fn test_digits_allows_digits() {
    for digit in '0'..='9' {
        assert!(!blocked(KeyFilter::Digits, &digit.to_string()));
    }
}

#[test]
fn test_digits_allows_navigation() {
    for key in NAVIGATION_KEYS {
        assert!(!blocked(KeyFilter::Digits, key), "{key} should be allowed");
    }
}

#[test]
fn test_digits_blocks_non_ascii_digits() {
    assert!(blocked(KeyFilter::Digits, "٣")); // Arabic-Indic three
}

#[test]
fn test_navigation_keys_are_exact() {
    assert!(is_navigation_key("Home"));
    assert!(!is_navigation_key("home"));
    assert!(!is_navigation_key("ArrowUp"));
}

#[test]
fn test_allowed_event_is_untouched() {
    let mut event = KeyDown::new("3");
    KeyFilter::Digits.on_key_down(&mut event);
    assert_eq!(event, KeyDown::new("3"));
}
