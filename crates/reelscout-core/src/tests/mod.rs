//! Scenario tests for reelscout-core
//!
//! Covers:
//! - Browse controller transitions (page clamping, filter resets, stale discard)
//! - Orchestrator task lifecycle against a scripted catalog
//! - Configuration loading from disk
//! - Page window properties

#![allow(clippy::float_cmp, clippy::cast_possible_truncation)]

mod browse_tests;
mod fixtures;
mod orchestrator_tests;
mod window_props;
