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

//! src/core/resolver.rs
//!
//! Field resolution
//!
//! Turns a list of `FieldSpec`s into a `FieldProps` mapping by dispatching
//! on each field's group:
//!
//! | Group | Capability | Overlay |
//! |-------|------------|---------|
//! | Masked-numeric | `register_with_mask` | text, numeric mode, maxLength, pattern, digit filter |
//! | Common-text | `register` | email / password / url attributes |
//! | Alphabetic | `register` | text, letter pattern, alpha filter |
//! | Fallback | `register` | text |
//!
//! The capability's props come first and the overlay is merged on top, so
//! the overlay wins on collisions.
//!
//! # Errors
//! Capability errors are returned unchanged and abort the whole call. There
//! is no per-field isolation.

use tracing::debug;

use crate::binding::{FieldBinding, WatchValues};
use crate::core::keys::KeyFilter;
use crate::core::mask::{self, Mask, MaskOptions};
use crate::core::patterns;
use crate::core::props::{attr, FieldProps, PropertyBag};
use crate::core::types::{FieldGroup, FieldSpec, FieldType, InputMode, InputType};

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Fixed attributes merged over the capability props for `field_type`
pub fn overlay(field_type: FieldType) -> PropertyBag {
    let bag = match field_type.group() {
        FieldGroup::MaskedNumeric(mask) => PropertyBag::new()
            .with(attr::TYPE, InputType::Text.to_string())
            .with(attr::INPUT_MODE, InputMode::Numeric.to_string())
            .with(attr::MAX_LENGTH, mask.slot_count())
            .with(attr::ON_KEY_DOWN, KeyFilter::Digits),
        FieldGroup::CommonText(InputType::Password) => PropertyBag::new()
            .with(attr::TYPE, InputType::Password.to_string())
            .with(attr::MIN_LENGTH, PASSWORD_MIN_LENGTH),
        FieldGroup::CommonText(input_type) => {
            PropertyBag::new().with(attr::TYPE, input_type.to_string())
        }
        FieldGroup::Alphabetic => PropertyBag::new()
            .with(attr::TYPE, InputType::Text.to_string())
            .with(attr::ON_KEY_DOWN, KeyFilter::Alpha),
        FieldGroup::Fallback => PropertyBag::new().with(attr::TYPE, InputType::Text.to_string()),
    };

    match patterns::pattern_source(field_type) {
        Some(source) => bag.with(attr::PATTERN, source),
        None => bag,
    }
}

/// Resolves a single field against `binding`
pub fn resolve_field<B: FieldBinding>(
    field: &FieldSpec,
    binding: &B,
) -> Result<PropertyBag, B::Error> {
    let base = match field.field_type.group() {
        FieldGroup::MaskedNumeric(mask) => {
            binding.register_with_mask(&field.name, mask, &MaskOptions::default())?
        }
        FieldGroup::CommonText(_) | FieldGroup::Alphabetic | FieldGroup::Fallback => {
            binding.register(&field.name)?
        }
    };

    debug!(field = %field.name, field_type = %field.field_type, "resolved field");

    Ok(base.merge(overlay(field.field_type)))
}

/// Resolves every field, keyed by name
///
/// Duplicate names resolve in order and the last one wins.
///
/// # Example
/// ```
/// use form_field_props::binding::PreviewBinding;
/// use form_field_props::core::{resolve, FieldSpec, FieldType};
///
/// let fields = vec![
///     FieldSpec::new("email", FieldType::Email),
///     FieldSpec::new("card", FieldType::CardNumber),
/// ];
/// let props = resolve(&fields, &PreviewBinding::new())?;
/// assert_eq!(props.len(), 2);
/// # Ok::<(), form_field_props::binding::BindingError>(())
/// ```
pub fn resolve<B: FieldBinding>(fields: &[FieldSpec], binding: &B) -> Result<FieldProps, B::Error> {
    let mut resolved = FieldProps::with_capacity(fields.len());

    for field in fields {
        let bag = resolve_field(field, binding)?;
        resolved.insert(field.name.clone(), bag);
    }

    Ok(resolved)
}

/// Like `resolve`, additionally deriving `value` and `maskedValue` from the
/// watched value of each field
///
/// Derived values are merged last. A field without a watched value derives
/// from the empty string.
pub fn resolve_with_values<B>(fields: &[FieldSpec], binding: &B) -> Result<FieldProps, B::Error>
where
    B: FieldBinding + WatchValues,
{
    let mut resolved = FieldProps::with_capacity(fields.len());

    for field in fields {
        let bag = resolve_field(field, binding)?;
        let watched = binding.watch(&field.name).unwrap_or_default();
        resolved.insert(
            field.name.clone(),
            bag.merge(derived_values(field.field_type, &watched)),
        );
    }

    Ok(resolved)
}

/// `value` and `maskedValue` for a watched value
pub fn derived_values(field_type: FieldType, value: &str) -> PropertyBag {
    PropertyBag::new()
        .with(attr::VALUE, clean_value(field_type, value))
        .with(attr::MASKED_VALUE, masked_value(field_type, value))
}

/// Digits only for masked types, unchanged otherwise
pub fn clean_value(field_type: FieldType, value: &str) -> String {
    if field_type.is_masked() {
        mask::strip(value)
    } else {
        value.to_string()
    }
}

/// Display form of `value`; unchanged for types without a mask
pub fn masked_value(field_type: FieldType, value: &str) -> String {
    match Mask::for_type(field_type) {
        Some(mask) => mask.apply(value),
        None => value.to_string(),
    }
}
