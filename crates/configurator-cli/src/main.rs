//! Configurator CLI - Generates tooling configuration for JavaScript projects

use anyhow::Result;
use clap::Parser;
use configurator_core::tui::GenerateArgs;
use configurator_core::{
    Bundler, ConfigOverrides, Formatter, LintCategory, Linter, TestFramework, UiFramework,
    UnknownOption,
};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// A choice on the command line, where `none` clears the selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice<T>(Option<T>);

impl<T: FromStr<Err = UnknownOption>> FromStr for Choice<T> {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("none") {
            return Ok(Choice(None));
        }
        T::from_str(s).map(|value| Choice(Some(value)))
    }
}

/// Comma-separated lint categories; an empty list turns lint categories off
#[derive(Debug, Clone, PartialEq)]
pub struct LintCategories(Vec<LintCategory>);

impl FromStr for LintCategories {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        split_list(s)
            .iter()
            .map(|item| item.parse())
            .collect::<Result<Vec<_>, _>>()
            .map(LintCategories)
    }
}

/// Split a comma-separated value, trimming items and dropping empty ones
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Parser, Debug)]
#[command(name = "configurator")]
#[command(about = "Generate linter, formatter, test and bundler configuration for a JavaScript project")]
#[command(version)]
pub struct Args {
    /// Directory to write the configuration into (must already exist)
    #[arg(default_value = ".")]
    pub out_dir: PathBuf,

    /// YAML config file to start from instead of the defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Entry source file, e.g. src/main.ts
    #[arg(long = "main-entry-point")]
    pub main_entry_point: Option<String>,

    /// Source globs (comma-separated)
    #[arg(long)]
    pub sources: Option<String>,

    /// Test globs (comma-separated)
    #[arg(long)]
    pub tests: Option<String>,

    /// Linter: eslint, oxlint, biome or none
    #[arg(long)]
    pub linter: Option<Choice<Linter>>,

    /// Formatter: prettier, oxfmt, biome or none
    #[arg(long)]
    pub formatter: Option<Choice<Formatter>>,

    /// Test framework: jest, mocha, vitest or none
    #[arg(long = "test-framework")]
    pub test_framework: Option<Choice<TestFramework>>,

    /// UI framework: react, vue, svelte, lit, angular, preact or none
    #[arg(long = "ui-framework")]
    pub ui_framework: Option<Choice<UiFramework>>,

    /// Bundler: tsdown, zshy, typescript, rolldown, esbuild or none
    #[arg(long)]
    pub bundler: Option<Choice<Bundler>>,

    /// Lint categories (comma-separated: correctness,performance,modernization), empty for none
    #[arg(long = "lint-categories")]
    pub lint_categories: Option<LintCategories>,

    /// Enable or disable TypeScript
    #[arg(long, action = clap::ArgAction::Set)]
    pub typescript: Option<bool>,

    /// Print the generated files instead of writing them
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Show debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only show errors in logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl From<Args> for GenerateArgs {
    fn from(args: Args) -> Self {
        GenerateArgs {
            out_dir: args.out_dir,
            config_file: args.config,
            overrides: ConfigOverrides {
                main_entry_point: args.main_entry_point,
                sources: args.sources.as_deref().map(split_list),
                tests: args.tests.as_deref().map(split_list),
                typescript: args.typescript,
                linter: args.linter.map(|choice| choice.0),
                formatter: args.formatter.map(|choice| choice.0),
                test_framework: args.test_framework.map(|choice| choice.0),
                ui_framework: args.ui_framework.map(|choice| choice.0),
                bundler: args.bundler.map(|choice| choice.0),
                lint_categories: args.lint_categories.map(|categories| categories.0),
            },
            dry_run: args.dry_run,
        }
    }
}

fn init_tracing(args: &Args) {
    let filter = if args.verbose {
        "debug"
    } else if args.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(&args);

    let result = configurator_core::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
