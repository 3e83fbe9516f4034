//! Check command implementation.
//!
//! Lexes every input file on a worker pool and reports the first lexical
//! error of each file. Nothing is printed for clean files unless verbose
//! output is on.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use cfgs_lex::{LexError, Lexer, TokenCollector};
use cfgs_util::{Diagnostic, Handler, SourceFile};
use rayon::prelude::*;

use crate::commands::common::{error_messages, print_diagnostics, read_source, stderr_renderer};
use crate::commands::traits::{Command, CommandDescription, CommandResult};
use crate::config::{CheckConfig, Config};
use crate::error::{CfgtError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to check.
    pub input: Vec<PathBuf>,
    /// Number of parallel jobs.
    pub jobs: Option<u32>,
    /// Disable colored diagnostics.
    pub no_color: bool,
}

/// Outcome of scanning one file.
#[derive(Debug)]
struct FileReport {
    file: SourceFile,
    tokens: usize,
    diagnostics: Vec<Diagnostic>,
    error: Option<LexError>,
}

impl FileReport {
    fn scan(file: SourceFile) -> Self {
        let handler = Handler::new();
        let mut collector = TokenCollector::new();
        let result = Lexer::new(file.content(), file.name(), &handler).consume(&mut collector);

        Self {
            tokens: collector.lexemes().len(),
            diagnostics: handler.take_diagnostics(),
            error: result.err(),
            file,
        }
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Get the effective check configuration.
    pub fn get_check_config(&self) -> CheckConfig {
        let mut config = self.config.check.clone();

        if let Some(jobs) = self.args.jobs {
            config.jobs = jobs;
        }

        config
    }

    /// Check every input and write the summary to `out`.
    ///
    /// Failing files are counted in the result, not returned as errors.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<CommandResult> {
        let started = Instant::now();

        if self.args.input.is_empty() {
            return Err(CfgtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let config = self.get_check_config();
        if config.jobs == 0 {
            return Err(CfgtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }

        let files = self
            .args
            .input
            .iter()
            .map(|path| Ok(SourceFile::new(path.display().to_string(), read_source(path)?)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(files = files.len(), jobs = config.jobs, "checking");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.jobs as usize)
            .build()
            .map_err(|e| {
                CfgtError::CommandExecution(format!("Failed to create worker pool: {}", e))
            })?;
        let reports: Vec<FileReport> =
            pool.install(|| files.into_par_iter().map(FileReport::scan).collect());

        let renderer = stderr_renderer(self.args.no_color);
        let mut failed = 0;
        for report in &reports {
            print_diagnostics(&renderer, &report.diagnostics, &report.file);
            match report.error {
                Some(ref error) => {
                    failed += 1;
                    tracing::debug!(file = report.file.name(), %error, "failed");
                },
                None if self.args.verbose => {
                    writeln!(out, "{}: ok ({} tokens)", report.file.name(), report.tokens)?;
                },
                None => {},
            }
        }

        let result = CommandResult::default()
            .with_items_processed(reports.len() - failed)
            .with_items_failed(failed)
            .with_execution_time_ms(started.elapsed().as_millis() as u64);

        writeln!(
            out,
            "{} file(s) ok, {} failed",
            result.items_processed, result.items_failed
        )?;

        Ok(result)
    }
}

impl Command for CheckCommand {
    type Args = CheckArgs;
    type Output = CommandResult;

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    fn name() -> &'static str {
        "check"
    }
}

impl CommandDescription for CheckCommand {
    fn description() -> &'static str {
        "Check that configuration files lex cleanly"
    }

    fn help() -> &'static str {
        "Scans the input files in parallel and prints a diagnostic for the \
         first lexical error in each. Exits with an error if any file fails."
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    tracing::debug!(
        command = CheckCommand::name(),
        files = args.input.len(),
        "running"
    );
    let result = CheckCommand::new(args, config).execute()?;
    if result.success() {
        Ok(())
    } else {
        Err(CfgtError::CheckFailed(result.items_failed))
    }
}
