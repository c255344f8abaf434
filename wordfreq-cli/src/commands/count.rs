//! Count command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordfreq_core::{Config, FrequencyTable, Input, ReportModel, WordCounter, WordOrder};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::{create_formatter, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: html, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Separator characters; `\s`, `\t`, `\n`, `\r` and `\\` are escapes
    #[arg(short, long, value_name = "CHARS")]
    pub separators: Option<String>,

    /// Order of the reported words
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Shorthand for `--order alphabetical`
    #[arg(long, conflicts_with = "order")]
    pub sort: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source name shown in the report (default: the input file names)
    #[arg(short, long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Word orders accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OrderArg {
    /// Order of first appearance
    FirstSeen,
    /// Case-insensitive alphabetical order
    Alphabetical,
}

impl From<OrderArg> for WordOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::FirstSeen => WordOrder::FirstSeen,
            OrderArg::Alphabetical => WordOrder::Alphabetical,
        }
    }
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting word count");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let counter = WordCounter::with_config(self.counting_config(&file_config)?);
        let format = self.format.unwrap_or(file_config.output.default_format);

        // Every input is opened before any counting starts
        let (inputs, labels) = self.collect_inputs()?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let mut table = FrequencyTable::new();
        for (input, label) in inputs.into_iter().zip(&labels) {
            let summary = counter
                .count_into(input, &mut table)
                .map_err(CliError::from)?;
            log::info!("{}: {} lines, {} words", label, summary.lines, summary.words);
            progress.file_completed(label);
        }
        progress.finish();

        let source = self.title.clone().unwrap_or_else(|| labels.join(", "));
        let report = counter.report(&table, source);
        log::info!(
            "Counted {} words, {} distinct, ordered {}",
            report.total_words(),
            report.distinct_words(),
            report.order()
        );

        self.write_report(&report, format, file_config.output.pretty_json)
    }

    /// Merge flags over the config file into a core configuration
    fn counting_config(&self, file_config: &CliConfig) -> Result<Config> {
        let builder = match &self.separators {
            Some(spec) => Config::builder()
                .separators_escaped(spec)
                .map_err(CliError::from)?,
            None => Config::builder().separators(&file_config.counting.separators),
        };

        let order = if self.sort {
            WordOrder::Alphabetical
        } else {
            self.order
                .map(WordOrder::from)
                .unwrap_or(file_config.counting.ordering)
        };

        let config = builder.order(order).build().map_err(CliError::from)?;
        log::debug!(
            "Separators: {}, order: {}",
            config.separators(),
            config.order()
        );
        Ok(config)
    }

    /// Resolve the input arguments into openable inputs and their labels
    fn collect_inputs(&self) -> Result<(Vec<Input>, Vec<String>)> {
        if self.input.iter().any(|pattern| pattern == STDIN_MARKER) {
            if self.input.len() > 1 {
                return Err(CliError::InvalidPattern(
                    "'-' (stdin) cannot be combined with other inputs".to_string(),
                )
                .into());
            }
            return Ok((vec![FileReader::stdin()], vec!["stdin".to_string()]));
        }

        let paths = resolve_patterns(&self.input)?;
        let mut inputs = Vec::with_capacity(paths.len());
        let mut labels = Vec::with_capacity(paths.len());

        for path in &paths {
            if let Ok(size) = FileReader::file_size(path) {
                log::debug!("{}: {} bytes", path.display(), size);
            }
            inputs.push(FileReader::open(path)?);
            labels.push(path.display().to_string());
        }

        Ok((inputs, labels))
    }

    fn write_report(
        &self,
        report: &ReportModel,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let mut formatter = create_formatter(format, writer, pretty_json);
        formatter.write_report(report)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when running several commands in one process
            if let Err(e) = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init()
            {
                log::debug!("Logger already initialized: {}", e);
            }
        }

        Ok(())
    }
}
