//! Common utilities shared across the fakescan workspace
//!
//! This crate provides functionality used by both the scoring core and the
//! e-commerce adapter:
//!
//! - Configuration loading with `!include` support
//! - Shared test helpers and review/listing fixtures

pub mod config;
pub mod yaml_include;

// Test helpers module - available for both development and test builds
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

#[cfg(any(test, feature = "test-helpers"))]
pub use test_helpers::{TestError, TestResult, fixtures, test_utils};
