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

//! Form Field Props
//!
//! Resolves the input properties (masks, patterns, key filters, input
//! modes) a typed form field should be bound to.
//!
//! # Features
//!
//! - **Closed Field Types:** email, password, phone, tckn, card number,
//!   expiry date, cvv, url, alpha and plain text
//! - **Input Masks:** Fixed templates with auto-unmask; clean and masked
//!   values derived from the current value
//! - **Key Filters:** Digit-only and letter-only keystroke interception
//! - **Pluggable Binding:** Host form libraries plug in through the
//!   `FieldBinding` and `WatchValues` traits
//!
//! # Architecture
//!
//! - **`core`:** Business logic (types, masks, patterns, key filters,
//!   property bags, resolver, field list parser)
//! - **`binding`:** Capability traits and the in-memory preview binding
//!
//! # Examples
//!
//! ## Resolving a form
//!
//! ```
//! use form_field_props::binding::PreviewBinding;
//! use form_field_props::core::{props::attr, resolve, FieldSpec, FieldType, PropValue};
//!
//! let fields = vec![
//!     FieldSpec::new("holder", FieldType::Alpha),
//!     FieldSpec::new("card", FieldType::CardNumber),
//! ];
//!
//! let props = resolve(&fields, &PreviewBinding::new())?;
//! assert_eq!(props["card"].get(attr::MAX_LENGTH), Some(&PropValue::Number(16)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Loading a field list
//!
//! ```no_run
//! use form_field_props::core::parser::load_fields;
//! use std::path::Path;
//!
//! let fields = load_fields(Path::new("/tmp/checkout.fields"))?;
//! println!("Found {} fields", fields.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binding;
pub mod core;

// Re-export commonly used types for convenience
pub use crate::binding::{FieldBinding, WatchValues};
pub use crate::core::{resolve, resolve_with_values, FieldSpec, FieldType, PropertyBag};
