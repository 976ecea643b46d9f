//! Fuzzy matching implementation for contact search.
//!
//! - Exact matching on phone numbers (formatting ignored)
//! - Fuzzy name matching with substring and Levenshtein scoring
//! - Confidence scoring (0-100 scale)

use crate::models::Record;

/// A match result containing a record and its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched record
    pub record: &'a Record,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact phone match
    ExactPhone,

    /// Fuzzy name match
    FuzzyName,
}

/// Search query parameters for record matching.
#[derive(Debug, Clone, Default)]
pub struct RecordQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Phone number to search for
    pub phone: Option<String>,
}

impl RecordQuery {
    /// Build a query from a single free-text search term.
    ///
    /// The term is always tried as a name; when it contains digits it is
    /// also tried as a phone number.
    pub fn from_term(term: &str) -> Self {
        let phone = term
            .chars()
            .any(|c| c.is_ascii_digit())
            .then(|| term.to_string());
        Self {
            name: Some(term.to_string()),
            phone,
        }
    }
}

/// Record matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct RecordMatcher;

impl RecordMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find matching records based on the search query.
    ///
    /// # Returns
    /// Matches sorted by confidence (highest first), then by name, at most
    /// `max_results` of them.
    pub fn find_matches<'a>(
        &self,
        query: &RecordQuery,
        records: &[&'a Record],
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = Vec::new();

        for &record in records {
            if let Some(phone) = &query.phone {
                if let Some(confidence) = self.match_phone(phone, record) {
                    results.push(MatchResult {
                        record,
                        confidence,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(name) = &query.name {
                if let Some(confidence) = self.fuzzy_match_name(name, record.name().as_str()) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            record,
                            confidence,
                            match_type: MatchType::FuzzyName,
                        });
                    }
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.record.name().as_str().cmp(b.record.name().as_str()))
        });
        results.truncate(max_results);

        tracing::debug!(
            matches = results.len(),
            "Matched {} of {} records",
            results.len(),
            records.len()
        );

        results
    }

    /// Match phone numbers on their digits.
    ///
    /// Returns confidence score (100) if matched, None otherwise.
    fn match_phone(&self, query_phone: &str, record: &Record) -> Option<u8> {
        let normalized_query = Self::normalize_phone(query_phone);
        if normalized_query.is_empty() {
            return None;
        }

        record
            .phones()
            .iter()
            .any(|phone| Self::normalize_phone(phone.as_str()) == normalized_query)
            .then_some(100)
    }

    /// Returns confidence score (0-95) if matched, None otherwise.
    fn fuzzy_match_name(&self, query: &str, name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);

        if score > 0 {
            Some(score)
        } else {
            None
        }
    }

    /// Calculate fuzzy match score using Levenshtein distance and substring matching.
    ///
    /// Returns a confidence score from 0-95 (95 max to reserve 100 for exact phone matches).
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (85.0 * ratio + 10.0) as u8; // 10-95 range for contains matches
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            // Too many differences
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row of the edit-distance matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    // ==================== Normalization Functions ====================

    /// Keep only the digits of a phone number.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Lowercase a name and collapse its whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
