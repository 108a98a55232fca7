/*!
 * Code block narration.
 *
 * Code is not read aloud. Instead each fenced block is classified by a few
 * content signatures and replaced with one sentence about its topic. This is
 * a heuristic: anything unrecognized gets the generic sentence.
 */

use super::profile::NarrationProfile;

/// Example domain types that get a sentence naming the class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainType {
    Color,
    Person,
    Ticket,
}

impl DomainType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Color => "Color",
            Self::Person => "Person",
            Self::Ticket => "Ticket",
        }
    }

    fn detect(&self, block: &str) -> bool {
        match self {
            // Color shows up as a bare type name in enum and record examples
            Self::Color => block.contains("Color"),
            Self::Person => block.contains("class Person"),
            Self::Ticket => block.contains("class Ticket"),
        }
    }
}

/// Topic of a code block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeTopic {
    DomainClass(DomainType),
    SqlUpdate,
    DataFormat,
    Generic,
}

impl CodeTopic {
    /// Signatures in priority order; `Generic` is the fallback and is not listed
    pub const SIGNATURES: [CodeTopic; 5] = [
        CodeTopic::DomainClass(DomainType::Color),
        CodeTopic::DomainClass(DomainType::Person),
        CodeTopic::DomainClass(DomainType::Ticket),
        CodeTopic::SqlUpdate,
        CodeTopic::DataFormat,
    ];

    /// Whether the block carries this topic's signature
    pub fn matches(&self, block: &str) -> bool {
        match self {
            Self::DomainClass(domain) => domain.detect(block),
            Self::SqlUpdate => block.contains("SQL") || block.contains("UPDATE"),
            Self::DataFormat => block.to_lowercase().contains("json"),
            Self::Generic => true,
        }
    }

    /// First matching signature, or `Generic`
    pub fn classify(block: &str) -> Self {
        Self::SIGNATURES
            .into_iter()
            .find(|topic| topic.matches(block))
            .unwrap_or(Self::Generic)
    }
}

/// Turns a fenced block into a narration sentence
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlockNarrator {
    profile: NarrationProfile,
}

impl CodeBlockNarrator {
    pub fn new(profile: NarrationProfile) -> Self {
        Self { profile }
    }

    /// Sentence for the whole fenced block, fences and language tag included
    pub fn narrate(&self, block: &str) -> String {
        self.profile.code_narration(CodeTopic::classify(block))
    }
}
