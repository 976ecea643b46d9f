//! Fuzzy matching utilities for contact search.
//!
//! This module provides fuzzy name matching and exact phone matching over
//! address book records.

pub mod record_matcher;

pub use record_matcher::{MatchResult, MatchType, RecordMatcher, RecordQuery};
