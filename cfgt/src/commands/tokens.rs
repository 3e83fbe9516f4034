//! Tokens command implementation.
//!
//! Lexes each input file and dumps its tokens, either one per line as
//! `file:line:column<TAB>kind<TAB>"text"` or as a JSON array.

use std::io::Write;
use std::path::PathBuf;

use cfgs_lex::{Lexeme, Lexer, TokenCollector};
use cfgs_util::{Handler, SourceFile};
use serde::Serialize;

use crate::commands::common::{
    error_messages, print_diagnostics, read_source, stderr_renderer, OutputFormat,
};
use crate::commands::traits::{Command, CommandDescription};
use crate::config::{Config, TokensConfig};
use crate::error::{CfgtError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Input files to lex.
    pub input: Vec<PathBuf>,
    /// Output format override.
    pub format: Option<String>,
    /// Leave comments out of the dump.
    pub no_comments: bool,
    /// Stop each file after this many tokens.
    pub limit: Option<usize>,
    /// Disable colored diagnostics.
    pub no_color: bool,
}

/// JSON shape of one dumped file.
#[derive(Debug, Serialize)]
struct FileTokens<'a> {
    file: &'a str,
    tokens: Vec<Lexeme<'a>>,
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Get the effective tokens configuration.
    pub fn get_tokens_config(&self) -> TokensConfig {
        let mut config = self.config.tokens.clone();

        if let Some(ref format) = self.args.format {
            config.format = format.clone();
        }

        if self.args.no_comments {
            config.include_comments = false;
        }

        config
    }

    /// Lex every input and write the dump to `out`.
    ///
    /// Stops at the first file that fails to lex, after printing its
    /// diagnostics to standard error.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.args.input.is_empty() {
            return Err(CfgtError::Validation(
                error_messages::NO_INPUT_FILES.to_string(),
            ));
        }

        let config = self.get_tokens_config();
        let format: OutputFormat = config.format.parse()?;

        let files = self
            .args
            .input
            .iter()
            .map(|path| Ok(SourceFile::new(path.display().to_string(), read_source(path)?)))
            .collect::<Result<Vec<_>>>()?;

        let mut dumps = Vec::with_capacity(files.len());
        for file in &files {
            let lexemes = self.lex_file(file, config.include_comments)?;
            match format {
                OutputFormat::Text => write_text(out, file, &lexemes)?,
                OutputFormat::Json => dumps.push(FileTokens {
                    file: file.name(),
                    tokens: lexemes,
                }),
            }
        }

        if format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, &dumps)?;
            writeln!(out)?;
        }

        Ok(())
    }

    /// Lex one file, printing its diagnostics on failure.
    fn lex_file<'f>(&self, file: &'f SourceFile, include_comments: bool) -> Result<Vec<Lexeme<'f>>> {
        let handler = Handler::new();
        let mut collector = TokenCollector::new().skip_comments(!include_comments);
        if let Some(limit) = self.args.limit {
            collector = collector.with_limit(limit);
        }

        let result = Lexer::new(file.content(), file.name(), &handler).consume(&mut collector);

        print_diagnostics(
            &stderr_renderer(self.args.no_color),
            &handler.take_diagnostics(),
            file,
        );
        result.map_err(|source| CfgtError::Lex {
            path: file.name().to_string(),
            source,
        })?;

        if self.args.verbose {
            tracing::info!(
                file = file.name(),
                tokens = collector.lexemes().len(),
                "lexed"
            );
        }
        Ok(collector.into_lexemes())
    }
}

/// Write one line per lexeme.
fn write_text<W: Write>(out: &mut W, file: &SourceFile, lexemes: &[Lexeme<'_>]) -> Result<()> {
    for lexeme in lexemes {
        let position = file.position_of(lexeme.span.start);
        writeln!(
            out,
            "{}:{}\t{}\t{:?}",
            file.name(),
            position,
            lexeme.kind,
            lexeme.text
        )?;
    }
    Ok(())
}

impl Command for TokensCommand {
    type Args = TokensArgs;
    type Output = ();

    fn new(args: Self::Args, config: Config) -> Self {
        Self { args, config }
    }

    fn execute(&self) -> Result<Self::Output> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    fn name() -> &'static str {
        "tokens"
    }
}

impl CommandDescription for TokensCommand {
    fn description() -> &'static str {
        "Dump the tokens of configuration files"
    }

    fn help() -> &'static str {
        "Lexes each input file and prints one token per line, or a JSON \
         array with --format json."
    }
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    tracing::debug!(
        command = TokensCommand::name(),
        files = args.input.len(),
        "running"
    );
    TokensCommand::new(args, config).execute()
}
