/*!
 * Lexical substitution table.
 *
 * Replaces literal jargon with phonetic spellings so a speech engine
 * pronounces it. Matching is a plain, case-sensitive substring replace over
 * the whole buffer, one entry at a time in declaration order. A later entry
 * sees the output of every earlier one.
 */

use serde::{Deserialize, Serialize};

use super::report::RuleHit;

/// A single term and its phonetic spelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionEntry {
    /// Literal text to look for
    pub source: String,
    /// Text that replaces every occurrence of `source`
    pub target: String,
}

impl SubstitutionEntry {
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
        }
    }
}

/// Ordered list of substitutions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<SubstitutionEntry>,
}

impl SubstitutionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(source, target)` pairs, keeping their order
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(source, target)| SubstitutionEntry::new(source, target))
                .collect(),
        }
    }

    /// Append an entry after all existing ones
    pub fn push(&mut self, source: &str, target: &str) {
        self.entries.push(SubstitutionEntry::new(source, target));
    }

    /// Builder form of [`push`](Self::push)
    pub fn with_entry(mut self, source: &str, target: &str) -> Self {
        self.push(source, target);
        self
    }

    /// Append entries after all existing ones
    pub fn extend<I: IntoIterator<Item = SubstitutionEntry>>(&mut self, entries: I) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[SubstitutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Apply every entry in order
    pub fn apply(&self, text: &str) -> String {
        self.apply_with_hits(text).0
    }

    /// Apply every entry in order and count the occurrences each one replaced
    pub fn apply_with_hits(&self, text: &str) -> (String, Vec<RuleHit>) {
        let mut hits = Vec::new();
        let result = self.entries.iter().fold(text.to_string(), |buffer, entry| {
            // An empty needle would match between every character
            if entry.source.is_empty() {
                return buffer;
            }
            let count = buffer.matches(entry.source.as_str()).count();
            if count == 0 {
                return buffer;
            }
            hits.push(RuleHit::new(&entry.source, count));
            buffer.replace(entry.source.as_str(), &entry.target)
        });
        (result, hits)
    }
}
