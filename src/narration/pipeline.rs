/*!
 * Narration pipeline orchestrator.
 *
 * The pipeline runs over a single text buffer in a fixed order:
 * 1. Canonicalization: BOM removal and CRLF to LF
 * 2. Pattern rules: citation line, headings, containers, code fences,
 *    images, horizontal rules, reserved labels, links, emphasis, blockquotes
 * 3. Lexical substitutions
 * 4. Whitespace normalization
 */

use log::debug;

use crate::errors::NarrationResult;

use super::patterns::{CodeBlockMode, PatternLibrary, Rule, DEFAULT_RESERVED_LABELS};
use super::profile::NarrationProfile;
use super::report::NarrationReport;
use super::substitutions::SubstitutionTable;
use super::whitespace;

/// Configuration for the narration pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Spoken vocabulary
    pub profile: NarrationProfile,

    /// Narrate or delete fenced code blocks
    pub code_blocks: CodeBlockMode,

    /// Substitutions applied after all pattern rules
    pub substitutions: SubstitutionTable,

    /// `#label` lines removed from the document
    pub reserved_labels: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new(NarrationProfile::default())
    }
}

impl PipelineConfig {
    /// Create a configuration with the profile's built-in substitution table.
    pub fn new(profile: NarrationProfile) -> Self {
        Self {
            profile,
            code_blocks: CodeBlockMode::default(),
            substitutions: profile.builtin_substitutions(),
            reserved_labels: DEFAULT_RESERVED_LABELS.iter().map(|label| label.to_string()).collect(),
        }
    }

    /// Create a configuration that deletes code blocks instead of narrating them.
    pub fn strip_only(profile: NarrationProfile) -> Self {
        Self::new(profile).with_code_blocks(CodeBlockMode::Strip)
    }

    /// Set the code block mode.
    pub fn with_code_blocks(mut self, mode: CodeBlockMode) -> Self {
        self.code_blocks = mode;
        self
    }

    /// Replace the substitution table.
    pub fn with_substitutions(mut self, table: SubstitutionTable) -> Self {
        self.substitutions = table;
        self
    }

    /// Replace the reserved label list.
    pub fn with_reserved_labels(mut self, labels: Vec<String>) -> Self {
        self.reserved_labels = labels;
        self
    }
}

/// Markdown to narration text converter
#[derive(Debug)]
pub struct NarrationPipeline {
    rules: Vec<Rule>,
    substitutions: SubstitutionTable,
}

impl NarrationPipeline {
    /// Build the pipeline described by `config`.
    pub fn new(config: &PipelineConfig) -> NarrationResult<Self> {
        let rules = PatternLibrary::rules(config.profile, config.code_blocks, &config.reserved_labels)?;
        Ok(Self {
            rules,
            substitutions: config.substitutions.clone(),
        })
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn substitutions(&self) -> &SubstitutionTable {
        &self.substitutions
    }

    /// Convert a Markdown document into narration text.
    pub fn process(&self, document: &str) -> String {
        self.process_with_report(document).0
    }

    /// Convert a Markdown document and report what each stage replaced.
    pub fn process_with_report(&self, document: &str) -> (String, NarrationReport) {
        let mut report = NarrationReport {
            input_len: document.len(),
            ..Default::default()
        };

        let canonical = whitespace::canonicalize(document);

        let stripped = self.rules.iter().fold(canonical, |buffer, rule| {
            let (next, hits) = rule.apply(&buffer);
            if hits > 0 {
                debug!("Rule '{}' replaced {} span(s)", rule.name(), hits);
            }
            report.record_rule(rule.name(), hits);
            next
        });

        let (substituted, substitution_hits) = self.substitutions.apply_with_hits(&stripped);
        for hit in &substitution_hits {
            debug!("Substituted '{}' {} time(s)", hit.name, hit.count);
        }
        report.substitution_hits = substitution_hits;

        let narration = whitespace::normalize(&substituted);
        report.output_len = narration.len();

        (narration, report)
    }
}
