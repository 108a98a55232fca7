/*!
 * Markdown to narration text conversion.
 *
 * - `patterns`: ordered stripping and rewriting rules
 * - `substitutions`: phonetic substitution table
 * - `code_blocks`: code block topic classifier and narrator
 * - `profile`: per-language labels, sentences and built-in tables
 * - `whitespace`: input canonicalization and output normalization
 * - `pipeline`: the orchestrator tying the stages together
 */

pub mod code_blocks;
pub mod patterns;
pub mod pipeline;
pub mod profile;
pub mod report;
pub mod substitutions;
pub mod whitespace;

pub use code_blocks::{CodeBlockNarrator, CodeTopic, DomainType};
pub use patterns::{CodeBlockMode, PatternLibrary, Replacement, Rule};
pub use pipeline::{NarrationPipeline, PipelineConfig};
pub use profile::NarrationProfile;
pub use report::{NarrationReport, RuleHit};
pub use substitutions::{SubstitutionEntry, SubstitutionTable};
