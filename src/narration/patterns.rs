/*!
 * Pattern library for Markdown stripping.
 *
 * Each rule is a named regex plus a replacement strategy. Rules run in a fixed
 * order over the output of the previous rule, so later rules may assume that
 * earlier ones already removed their syntax. Images must go before links,
 * for instance, since `![alt](url)` also looks like a link.
 */

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::errors::NarrationResult;

use super::code_blocks::CodeBlockNarrator;
use super::profile::NarrationProfile;

/// Source URL alone on the first line of the document
static CITATION_LINE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A[ \t]*https?://\S+[ \t]*\n+").expect("Invalid citation line regex")
});

/// ATX headings of level 1 to 4; deeper levels fail on the fifth `#`
static HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(#{1,4}) (.+)$").expect("Invalid heading regex")
});

/// Component container open (`::name`, `::name{props}`) and close (`::`) lines
static CONTAINER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^::(?:[a-z][a-z-]*(?:\{[^}\n]*\})?)?[ \t]*(?:\n|\z)")
        .expect("Invalid container regex")
});

/// Mermaid diagram fences
static MERMAID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```mermaid\b.*?```").expect("Invalid mermaid regex")
});

/// Any fenced code block, language tag included
static CODE_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```.*?```").expect("Invalid code fence regex")
});

static IMAGE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("Invalid image regex")
});

static HORIZONTAL_RULE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^-{3,}[ \t]*(?:\n|\z)").expect("Invalid horizontal rule regex")
});

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]*)\]\([^)]*\)").expect("Invalid link regex")
});

/// Emphasis markers, paired or not
static EMPHASIS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\*\*|\*|_").expect("Invalid emphasis regex")
});

/// One or more nested quote markers at line start
static BLOCKQUOTE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(?:>[ \t]?)+").expect("Invalid blockquote regex")
});

/// Lowercase-hyphen identifier accepted as a reserved label
static LABEL_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9-]*$").expect("Invalid label name regex")
});

/// Computes the replacement text from a match
pub type ReplaceFn = Box<dyn Fn(&Captures<'_>) -> String + Send + Sync>;

/// How a matched span is rewritten
pub enum Replacement {
    /// Drop the span
    Remove,
    /// Replace the span with fixed text
    Literal(String),
    /// Expand a capture-group template such as `${1}`
    Template(String),
    /// Compute the replacement from the match
    Computed(ReplaceFn),
}

impl std::fmt::Debug for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remove => write!(f, "Remove"),
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Self::Computed(_) => write!(f, "Computed(..)"),
        }
    }
}

/// A named pattern and its replacement strategy
#[derive(Debug)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replacement: Replacement,
}

impl Rule {
    pub fn new(name: &'static str, pattern: Regex, replacement: Replacement) -> Self {
        Self {
            name,
            pattern,
            replacement,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite every match and return the new text with the number of matches
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut hits = 0;
        let result = self
            .pattern
            .replace_all(text, |caps: &Captures<'_>| {
                hits += 1;
                match &self.replacement {
                    Replacement::Remove => String::new(),
                    Replacement::Literal(literal) => literal.clone(),
                    Replacement::Template(template) => {
                        let mut expanded = String::new();
                        caps.expand(template, &mut expanded);
                        expanded
                    }
                    Replacement::Computed(compute) => compute(caps),
                }
            })
            .into_owned();
        (result, hits)
    }
}

/// What happens to fenced code blocks
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CodeBlockMode {
    /// Replace each block with a sentence about its topic
    #[default]
    Narrate,
    /// Delete each block
    Strip,
}

/// Reserved labels removed by default (Docus slot markers)
pub const DEFAULT_RESERVED_LABELS: &[&str] = &["title", "content"];

/// Builds the ordered rule list
pub struct PatternLibrary;

impl PatternLibrary {
    /// All rules in application order
    pub fn rules(
        profile: NarrationProfile,
        code_blocks: CodeBlockMode,
        reserved_labels: &[String],
    ) -> NarrationResult<Vec<Rule>> {
        let mut rules = vec![
            Self::citation_line(),
            Self::headings(profile),
            Self::containers(),
            Self::mermaid_blocks(),
        ];

        match code_blocks {
            CodeBlockMode::Narrate => rules.push(Self::code_block_narration(profile)),
            CodeBlockMode::Strip => rules.push(Self::code_blocks()),
        }

        rules.push(Self::images());
        rules.push(Self::horizontal_rules());
        if let Some(rule) = Self::reserved_labels(reserved_labels)? {
            rules.push(rule);
        }
        rules.push(Self::links());
        rules.push(Self::emphasis());
        rules.push(Self::blockquotes());

        Ok(rules)
    }

    pub fn citation_line() -> Rule {
        Rule::new("citation_line", CITATION_LINE_REGEX.clone(), Replacement::Remove)
    }

    pub fn headings(profile: NarrationProfile) -> Rule {
        Rule::new(
            "headings",
            HEADING_REGEX.clone(),
            Replacement::Computed(Box::new(move |caps: &Captures<'_>| {
                let level = caps[1].len();
                match profile.heading_label(level) {
                    Some(label) => format!("{}: {}", label, &caps[2]),
                    None => caps[0].to_string(),
                }
            })),
        )
    }

    pub fn containers() -> Rule {
        Rule::new("containers", CONTAINER_REGEX.clone(), Replacement::Remove)
    }

    pub fn mermaid_blocks() -> Rule {
        Rule::new("mermaid_blocks", MERMAID_REGEX.clone(), Replacement::Remove)
    }

    pub fn code_blocks() -> Rule {
        Rule::new("code_blocks", CODE_FENCE_REGEX.clone(), Replacement::Remove)
    }

    pub fn code_block_narration(profile: NarrationProfile) -> Rule {
        let narrator = CodeBlockNarrator::new(profile);
        Rule::new(
            "code_block_narration",
            CODE_FENCE_REGEX.clone(),
            Replacement::Computed(Box::new(move |caps: &Captures<'_>| narrator.narrate(&caps[0]))),
        )
    }

    pub fn images() -> Rule {
        Rule::new("images", IMAGE_REGEX.clone(), Replacement::Remove)
    }

    pub fn horizontal_rules() -> Rule {
        Rule::new("horizontal_rules", HORIZONTAL_RULE_REGEX.clone(), Replacement::Remove)
    }

    /// Line-level removal of `#label` markers; `None` when no labels are configured
    ///
    /// Labels are escaped, so compilation only fails when the list is large
    /// enough to exceed the regex size limit.
    pub fn reserved_labels(labels: &[String]) -> NarrationResult<Option<Rule>> {
        if labels.is_empty() {
            return Ok(None);
        }

        let alternatives = labels
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&format!(r"(?m)^#(?:{})[ \t]*(?:\n|\z)", alternatives))?;

        Ok(Some(Rule::new("reserved_labels", pattern, Replacement::Remove)))
    }

    pub fn links() -> Rule {
        Rule::new("links", LINK_REGEX.clone(), Replacement::Template("${1}".to_string()))
    }

    pub fn emphasis() -> Rule {
        Rule::new("emphasis", EMPHASIS_REGEX.clone(), Replacement::Remove)
    }

    pub fn blockquotes() -> Rule {
        Rule::new("blockquotes", BLOCKQUOTE_REGEX.clone(), Replacement::Remove)
    }

    /// Whether `label` can be used as a reserved label
    pub fn is_valid_label(label: &str) -> bool {
        LABEL_NAME_REGEX.is_match(label)
    }
}
