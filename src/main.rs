// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use mdnarrate::app_config::{Config, LogLevel};
use mdnarrate::app_controller::Controller;
use mdnarrate::narration::{CodeBlockMode, NarrationProfile};

/// CLI Wrapper for NarrationProfile to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliProfile {
    English,
    Ukrainian,
}

impl From<CliProfile> for NarrationProfile {
    fn from(cli_profile: CliProfile) -> Self {
        match cli_profile {
            CliProfile::English => NarrationProfile::English,
            CliProfile::Ukrainian => NarrationProfile::Ukrainian,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

/// Options shared by every conversion command
#[derive(Args, Debug, Clone)]
struct CommonOptions {
    /// Delete code blocks instead of narrating them
    #[arg(long, global = true)]
    strip_code: bool,

    /// Narration language
    #[arg(short, long, value_enum, global = true)]
    profile: Option<CliProfile>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert one Markdown file (default command)
    Convert {
        /// Markdown document to read
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Narration text file to write (overwritten)
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },

    /// Convert every Markdown file under a directory
    Batch {
        /// Directory to scan recursively for .md files
        #[arg(value_name = "DIR")]
        input_dir: PathBuf,

        /// Write narration files here instead of next to their inputs
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Generate shell completions for mdnarrate
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// mdnarrate - Markdown to text-to-speech narration
///
/// Strips Markdown structure, narrates code blocks and rewrites technical
/// vocabulary phonetically so the result can be fed to a speech engine.
#[derive(Parser, Debug)]
#[command(name = "mdnarrate")]
#[command(version)]
#[command(about = "Convert Markdown documents into plain narration text")]
#[command(long_about = "mdnarrate turns Markdown lessons into plain text for text-to-speech.

EXAMPLES:
    mdnarrate lesson.md lesson.tts.txt              # Convert one file
    mdnarrate --strip-code lesson.md out.txt        # Delete code blocks instead of narrating
    mdnarrate -p ukrainian lesson.md out.txt        # Ukrainian labels and phonetic table
    mdnarrate batch content/ -o narration/          # Convert a whole tree
    mdnarrate completions bash > mdnarrate.bash     # Generate bash completions

CONFIGURATION:
    An optional JSON file passed with --config may set profile, code_blocks,
    substitutions (use_builtin, extra), reserved_labels and log_level.
    Command line flags override it.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Markdown document to read
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Narration text file to write (overwritten)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    common: CommonOptions,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        // The max level set later via log::set_max_level filters further
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Accept everything here; the effective level is applied once the config is known
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "mdnarrate", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert { input, output }) => run_convert(&cli.common, input, output),
        Some(Commands::Batch { input_dir, output_dir }) => {
            run_batch(&cli.common, input_dir, output_dir)
        }
        None => match (cli.input, cli.output) {
            (Some(input), Some(output)) => run_convert(&cli.common, input, output),
            _ => CommandLineOptions::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "both <INPUT> and <OUTPUT> paths are required",
                )
                .exit(),
        },
    }
}

// Load the config file if given, then apply command line overrides
fn build_config(options: &CommonOptions) -> Result<Config> {
    let mut config = match &options.config_path {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    if let Some(profile) = &options.profile {
        config.profile = profile.clone().into();
    }

    if options.strip_code {
        config.code_blocks = CodeBlockMode::Strip;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    Ok(config)
}

fn run_convert(options: &CommonOptions, input: PathBuf, output: PathBuf) -> Result<()> {
    let config = build_config(options)?;
    let controller = Controller::with_config(config)?;

    controller
        .convert(&input, &output)
        .with_context(|| format!("Failed to convert {}", input.display()))?;

    println!("Narration text saved to {}", output.display());
    Ok(())
}

fn run_batch(options: &CommonOptions, input_dir: PathBuf, output_dir: Option<PathBuf>) -> Result<()> {
    let config = build_config(options)?;
    let controller = Controller::with_config(config)?;

    info!("Starting batch conversion for directory: {:?}", input_dir);
    let summary = controller.convert_folder(&input_dir, output_dir.as_deref())?;

    if !summary.is_success() {
        for (path, message) in &summary.failed {
            warn!("{}: {}", path.display(), message);
        }
        anyhow::bail!(
            "{} of {} file(s) failed to convert",
            summary.failed.len(),
            summary.failed.len() + summary.converted.len()
        );
    }

    Ok(())
}
