//! Integration test support for sentiment-tracker.
//!
//! Drives whole poll cycles against in-process providers:
//! - mock exchange ticker and chart endpoints over real HTTP
//! - canned payloads for success, empty history, and provider failures

pub mod common;
