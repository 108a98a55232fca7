/*!
 * # mdnarrate - Markdown to narration text
 *
 * A Rust library that turns Markdown lessons into plain text for
 * text-to-speech engines.
 *
 * ## Features
 *
 * - Strip Markdown structure (links, images, emphasis, blockquotes, rules)
 * - Remove Docus component containers and slot labels
 * - Read headings with spoken labels ("Section: ...")
 * - Replace code blocks with a sentence about their topic, or drop them
 * - Rewrite jargon and acronyms phonetically with an ordered table
 * - English and Ukrainian narration profiles
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `narration`: the conversion pipeline:
 *   - `narration::patterns`: ordered stripping rules
 *   - `narration::substitutions`: phonetic substitution table
 *   - `narration::code_blocks`: code block narrator
 *   - `narration::pipeline`: orchestrator and whitespace normalization
 * - `app_config`: Configuration management
 * - `app_controller`: File and folder conversion
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod narration;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{NarrationError, NarrationResult};
pub use narration::{NarrationPipeline, NarrationProfile, PipelineConfig, SubstitutionTable};
