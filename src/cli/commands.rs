use crate::linter::{lint_contexts, LintIssue, LintSeverity};
use crate::model::{load_contexts, GenerationKind, OperationContext, UrlKeyDelimiter};
use crate::route::build_route_template;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command-line interface for the route template generator
#[derive(Parser, Debug)]
#[command(name = "odata-route-gen")]
#[command(about = "Build OData route templates from operation context documents", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one route template per operation
    Render {
        /// Path to the operation document (YAML, TOML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Override the generation kind of every operation
        #[arg(long, value_enum)]
        generation: Option<GenerationArg>,

        /// Override the key delimiter of every operation
        #[arg(long, value_enum)]
        delimiter: Option<DelimiterArg>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Report metadata that degrades route templates
    Lint {
        /// Path to the operation document (YAML, TOML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum GenerationArg {
    Server,
    Client,
}

impl From<GenerationArg> for GenerationKind {
    fn from(arg: GenerationArg) -> Self {
        match arg {
            GenerationArg::Server => GenerationKind::Server,
            GenerationArg::Client => GenerationKind::Client,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DelimiterArg {
    Parentheses,
    Slash,
}

impl From<DelimiterArg> for UrlKeyDelimiter {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Parentheses => UrlKeyDelimiter::Parentheses,
            DelimiterArg::Slash => UrlKeyDelimiter::Slash,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `Controller.Action  template`, one per line
    Text,
    /// JSON array of `{ "action", "template" }`
    Json,
}

/// One rendered template, as emitted in JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRoute {
    pub action: String,
    pub template: String,
}

/// Apply command-line overrides and build every template.
#[must_use]
pub fn render_contexts(
    contexts: &mut [OperationContext],
    generation: Option<GenerationKind>,
    delimiter: Option<UrlKeyDelimiter>,
) -> Vec<RenderedRoute> {
    contexts
        .iter_mut()
        .map(|context| {
            if let Some(kind) = generation {
                context.generation_kind = kind;
            }
            if let Some(delimiter) = delimiter {
                context.url_key_delimiter = delimiter;
            }
            RenderedRoute {
                action: context.display_name(),
                template: build_route_template(context),
            }
        })
        .collect()
}

/// Write rendered routes in the requested format.
pub fn write_routes(
    out: &mut impl Write,
    routes: &[RenderedRoute],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let width = routes.iter().map(|r| r.action.len()).max().unwrap_or(0);
            for route in routes {
                writeln!(out, "{:<width$}  {}", route.action, route.template)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, routes)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Write lint issues, most severe first.
pub fn write_issues(out: &mut impl Write, issues: &[LintIssue]) -> anyhow::Result<()> {
    let mut sorted: Vec<&LintIssue> = issues.iter().collect();
    sorted.sort_by(|a, b| b.severity.cmp(&a.severity));

    for issue in sorted {
        writeln!(
            out,
            "[{}] {} ({}): {}",
            issue.severity, issue.location, issue.kind, issue.message
        )?;
        if let Some(suggestion) = &issue.suggestion {
            writeln!(out, "    suggestion: {}", suggestion)?;
        }
    }
    Ok(())
}

/// Execute a parsed command.
///
/// # Errors
///
/// Returns an error if:
/// - The operation document cannot be read or parsed
/// - Writing to stdout fails
/// - `lint --fail-on-error` finds errors
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Render {
            input,
            generation,
            delimiter,
            format,
        } => {
            let mut contexts = load_contexts(&input)?;
            let routes = render_contexts(
                &mut contexts,
                generation.map(Into::into),
                delimiter.map(Into::into),
            );
            info!(input = %input.display(), routes = routes.len(), "rendered route templates");
            write_routes(&mut out, &routes, format)
        }
        Commands::Lint {
            input,
            fail_on_error,
            errors_only,
        } => {
            let contexts = load_contexts(&input)?;
            let mut issues = lint_contexts(&contexts);
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            write_issues(&mut out, &issues)?;

            let errors = issues
                .iter()
                .filter(|i| i.severity == LintSeverity::Error)
                .count();
            if fail_on_error && errors > 0 {
                anyhow::bail!("{} lint error(s) in {}", errors, input.display());
            }
            Ok(())
        }
    }
}

/// Parse arguments from the process and execute them.
pub fn run_cli() -> anyhow::Result<()> {
    execute(Cli::parse())
}
