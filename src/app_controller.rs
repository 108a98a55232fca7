use anyhow::{anyhow, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::app_config::Config;
use crate::errors::NarrationResult;
use crate::file_utils::FileManager;
use crate::narration::{NarrationPipeline, NarrationReport};

// @module: Application controller for Markdown to narration conversion

/// Result of converting a single document
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: NarrationReport,
}

/// Result of converting a directory tree
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    /// Successfully converted documents
    pub converted: Vec<ConversionOutcome>,
    /// Documents that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Pipeline built from the configuration
    pipeline: NarrationPipeline,
}

impl Controller {
    /// Create a controller with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let pipeline = NarrationPipeline::new(&config.pipeline_config())
            .context("Failed to build narration pipeline")?;
        debug!("Pipeline rules: {}", pipeline.rule_names().join(", "));

        Ok(Self { config, pipeline })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn pipeline(&self) -> &NarrationPipeline {
        &self.pipeline
    }

    /// Convert a document already in memory
    pub fn convert_text(&self, markdown: &str) -> String {
        self.pipeline.process(markdown)
    }

    /// Convert one Markdown file into a narration text file
    pub fn convert<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input: P1,
        output: P2,
    ) -> NarrationResult<ConversionOutcome> {
        let input = input.as_ref();
        let output = output.as_ref();

        let markdown = FileManager::read_document(input)?;
        let (narration, report) = self.pipeline.process_with_report(&markdown);
        FileManager::write_atomic(output, &narration)?;

        info!(
            "Converted {} -> {} ({} rule hits, {} substitutions)",
            input.display(),
            output.display(),
            report.total_rule_hits(),
            report.total_substitutions()
        );

        Ok(ConversionOutcome {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            report,
        })
    }

    /// Convert every Markdown file under `input_dir`
    ///
    /// Outputs go next to their inputs, or under `output_dir` mirroring the
    /// relative layout. A failing file is logged and counted, not fatal.
    pub fn convert_folder<P: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Option<&Path>,
    ) -> Result<BatchSummary> {
        let input_dir = input_dir.as_ref();
        let start_time = Instant::now();

        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let documents = FileManager::find_markdown_files(input_dir)?;
        if documents.is_empty() {
            warn!("No Markdown files found in directory: {:?}", input_dir);
            return Ok(BatchSummary::default());
        }

        let progress_bar = ProgressBar::new(documents.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("=>-"));

        let mut summary = BatchSummary::default();

        for document in &documents {
            let file_name = document
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            progress_bar.set_message(file_name.clone());

            let target_dir = Self::target_dir(input_dir, document, output_dir);
            let output_path = FileManager::generate_output_path(document, &target_dir);

            match self.convert(document, &output_path) {
                Ok(outcome) => summary.converted.push(outcome),
                Err(e) => {
                    warn!("Failed to convert {}: {}", file_name, e);
                    summary.failed.push((document.clone(), e.to_string()));
                }
            }

            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();

        info!(
            "Folder processing completed in {:.2?}: {} converted, {} failed",
            start_time.elapsed(),
            summary.converted.len(),
            summary.failed.len()
        );

        Ok(summary)
    }

    // Directory that receives the narration file of `document`
    fn target_dir(input_dir: &Path, document: &Path, output_dir: Option<&Path>) -> PathBuf {
        let source_dir = document.parent().unwrap_or(input_dir);
        match output_dir {
            Some(output_dir) => match source_dir.strip_prefix(input_dir) {
                Ok(relative) => output_dir.join(relative),
                Err(_) => output_dir.to_path_buf(),
            },
            None => source_dir.to_path_buf(),
        }
    }
}
