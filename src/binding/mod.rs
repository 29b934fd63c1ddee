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

//! Form-binding capabilities
//!
//! The resolver never registers fields itself. It calls out to a host
//! form-binding library through `FieldBinding`, and to its value watcher
//! through `WatchValues`. Both are synchronous.
//!
//! # Preview binding
//!
//! `PreviewBinding` is an in-memory implementation that returns the props a
//! typical host would return (name, change/blur handler handles, ref). It
//! backs the CLI and is handy as a test double.
//!
//! # Example
//! ```
//! use form_field_props::binding::{FieldBinding, PreviewBinding};
//!
//! let binding = PreviewBinding::new();
//! let props = binding.register("email")?;
//! assert!(props.contains("onChange"));
//! # Ok::<(), form_field_props::binding::BindingError>(())
//! ```

use std::collections::HashMap;
use thiserror::Error;

use crate::core::mask::{Mask, MaskOptions};
use crate::core::props::{PropValue, PropertyBag};

/// Field registration provided by the host form library
pub trait FieldBinding {
    /// Error raised by the host; returned unchanged by the resolver
    type Error;

    /// Registers a plain field and returns its binding props
    fn register(&self, name: &str) -> Result<PropertyBag, Self::Error>;

    /// Registers a field with an input mask applied to its element
    fn register_with_mask(
        &self,
        name: &str,
        mask: Mask,
        options: &MaskOptions,
    ) -> Result<PropertyBag, Self::Error>;
}

/// Read access to the current value of a field
pub trait WatchValues {
    /// Current value, `None` if the field has never been set
    fn watch(&self, name: &str) -> Option<String>;
}

/// Errors raised by `PreviewBinding`
#[derive(Debug, Error, PartialEq)]
pub enum BindingError {
    /// Field names are used as keys and element ids
    #[error("Field name must not be empty")]
    EmptyName,
}

/// In-memory binding that mimics a host form library
#[derive(Clone, Debug, Default)]
pub struct PreviewBinding {
    values: HashMap<String, String>,
}

impl PreviewBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the value returned by `watch` for `name`
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl FieldBinding for PreviewBinding {
    type Error = BindingError;

    fn register(&self, name: &str) -> Result<PropertyBag, BindingError> {
        if name.is_empty() {
            return Err(BindingError::EmptyName);
        }

        Ok(PropertyBag::new()
            .with("name", name)
            .with("onChange", PropValue::Token(format!("onChange:{name}")))
            .with("onBlur", PropValue::Token(format!("onBlur:{name}")))
            .with("ref", PropValue::Token(format!("ref:{name}"))))
    }

    fn register_with_mask(
        &self,
        name: &str,
        mask: Mask,
        options: &MaskOptions,
    ) -> Result<PropertyBag, BindingError> {
        let masked = PropertyBag::new()
            .with("mask", mask.template())
            .with("showMaskOnFocus", options.show_mask_on_focus)
            .with("showMaskOnHover", options.show_mask_on_hover)
            .with("autoUnmask", options.auto_unmask)
            .with("placeholder", options.placeholder.as_str());

        Ok(self.register(name)?.merge(masked))
    }
}

impl WatchValues for PreviewBinding {
    fn watch(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
