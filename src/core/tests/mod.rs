//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Field resolution tests (golden table, merge order, errors)
//! - Mask tests
//! - Key filter tests
//! - Field list parser tests

#[cfg(test)]
mod keys_tests;
#[cfg(test)]
mod mask_tests;
