//! Test utilities.
//!
//! This module provides:
//! - An in-memory blob store for mocking persistence
//! - Test data factories for creating valid fixtures
//! - Builders for wiring use cases with test dependencies

mod blob_mocks;
mod factories;

pub use blob_mocks::*;
pub use factories::*;
