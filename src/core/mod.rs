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

//! src/core/mod.rs
//!
//! Core resolution logic
//!
//! This module contains the data structures and algorithms that map typed
//! form fields to input properties, including:
//! - Type definitions for field types and field specs
//! - Mask templates and value masking
//! - Validation patterns and key-down filters
//! - Property bags and the field resolver
//! - Field list parsing
//!
//! Nothing here touches a UI. Registration goes through the capability
//! traits in `crate::binding`, so everything is testable with stubs.

pub mod keys;
pub mod mask;
pub mod parser;
pub mod patterns;
pub mod props;
pub mod resolver;
pub mod types;

pub use keys::{KeyDown, KeyFilter};
pub use mask::{Mask, MaskOptions};
pub use props::{FieldProps, PropValue, PropertyBag};
pub use resolver::{resolve, resolve_field, resolve_with_values};
pub use types::*;

#[cfg(test)]
mod tests;
