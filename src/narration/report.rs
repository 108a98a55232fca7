/*!
 * Per-run statistics of the narration pipeline.
 */

/// How many spans one rule or substitution replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleHit {
    /// Rule name or substitution source term
    pub name: String,
    /// Number of replaced spans
    pub count: usize,
}

impl RuleHit {
    pub fn new(name: &str, count: usize) -> Self {
        Self {
            name: name.to_string(),
            count,
        }
    }
}

/// Report of a single pipeline run
#[derive(Debug, Clone, Default)]
pub struct NarrationReport {
    /// Hits per pattern rule, in application order (zero-hit rules included)
    pub rule_hits: Vec<RuleHit>,
    /// Hits per substitution entry that matched at least once
    pub substitution_hits: Vec<RuleHit>,
    /// Length of the input in bytes
    pub input_len: usize,
    /// Length of the narration text in bytes
    pub output_len: usize,
}

impl NarrationReport {
    pub(crate) fn record_rule(&mut self, name: &str, count: usize) {
        self.rule_hits.push(RuleHit::new(name, count));
    }

    /// Number of spans the named rule replaced
    pub fn hits_for(&self, rule_name: &str) -> usize {
        self.rule_hits
            .iter()
            .filter(|hit| hit.name == rule_name)
            .map(|hit| hit.count)
            .sum()
    }

    /// Total spans replaced by pattern rules
    pub fn total_rule_hits(&self) -> usize {
        self.rule_hits.iter().map(|hit| hit.count).sum()
    }

    /// Total occurrences replaced by the substitution table
    pub fn total_substitutions(&self) -> usize {
        self.substitution_hits.iter().map(|hit| hit.count).sum()
    }
}
