//! Generate a project's tooling configuration with cliclack progress output

use crate::config::{load_config, Config, ConfigOverrides};
use crate::engine::execute;
use crate::sink::{FsSink, MemorySink};
use crate::Error;
use anyhow::{Context, Result};
use colored::Colorize;
use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::{Path, PathBuf};

/// CLI arguments for a generation run
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Existing directory the files are written into
    pub out_dir: PathBuf,

    /// YAML config file, applied over the defaults
    pub config_file: Option<PathBuf>,

    /// Command line values, applied over the config file
    pub overrides: ConfigOverrides,

    /// Print the generated files instead of writing them
    pub dry_run: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            config_file: None,
            overrides: ConfigOverrides::default(),
            dry_run: false,
        }
    }
}

/// Run a generation with progress output
pub async fn run(args: GenerateArgs) -> Result<()> {
    cliclack::intro("Configurator")?;

    // Step 1: Resolve the configuration
    let config = resolve_config(&args).await?;
    print_selection(&config)?;

    // Step 2: Generate
    if args.dry_run {
        preview(&config).await?;
        cliclack::outro("Dry run complete, nothing was written")?;
        return Ok(());
    }

    ensure_out_dir(&args.out_dir).await?;
    let sink = generate(&config, &args.out_dir).await?;

    // Step 3: Show what changed
    print_summary(&sink)?;

    Ok(())
}

async fn resolve_config(args: &GenerateArgs) -> Result<Config> {
    let mut config = match &args.config_file {
        Some(path) => {
            let config = load_config(path).await?;
            cliclack::log::info(format!("Using config from {}", path.display()))?;
            config
        }
        None => Config::default(),
    };

    if !args.overrides.is_empty() {
        tracing::debug!(overrides = ?args.overrides, "applying command line overrides");
    }
    args.overrides.clone().apply(&mut config);

    Ok(config)
}

async fn ensure_out_dir(out_dir: &Path) -> Result<()> {
    let metadata = tokio::fs::metadata(out_dir)
        .await
        .with_context(|| format!("Output directory does not exist: {}", out_dir.display()))?;

    if !metadata.is_dir() {
        anyhow::bail!("Output path is not a directory: {}", out_dir.display());
    }
    Ok(())
}

fn describe<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "none".to_string(), |value| value.to_string())
}

fn print_selection(config: &Config) -> Result<()> {
    let categories = config
        .lint_config
        .as_ref()
        .map(|lint| {
            lint.categories
                .iter()
                .map(|category| category.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|joined| !joined.is_empty());

    let lines = [
        ("Linter", describe(config.linter)),
        ("Formatter", describe(config.formatter)),
        ("Test framework", describe(config.test_framework)),
        ("UI framework", describe(config.ui_framework)),
        ("Bundler", describe(config.bundler)),
        ("TypeScript", if config.typescript { "yes" } else { "no" }.to_string()),
        ("Lint categories", describe(categories)),
    ];

    let message = lines
        .iter()
        .map(|(label, value)| format!("{:<16}{}", label, value.cyan()))
        .collect::<Vec<_>>()
        .join("\n");

    cliclack::note("Selection", message)?;
    Ok(())
}

/// Log a validation failure and exit, or hand back any other error
fn handle_error(err: Error, spinner: &cliclack::ProgressBar) -> Result<()> {
    spinner.stop("Generation failed");

    if err.is_validation() {
        cliclack::log::error(err.to_string())?;
        cliclack::outro_cancel("No files were written")?;
        std::process::exit(1);
    }

    Err(anyhow::Error::new(err))
}

async fn generate(config: &Config, out_dir: &Path) -> Result<FsSink> {
    let spinner = cliclack::spinner();
    spinner.start("Generating configuration files...");

    let mut sink = FsSink::new(out_dir);
    if let Err(err) = execute(config, &mut sink).await {
        handle_error(err, &spinner)?;
    }

    spinner.stop(format!(
        "Wrote {} files to {}",
        sink.written().len(),
        out_dir.display()
    ));

    Ok(sink)
}

async fn preview(config: &Config) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Rendering configuration files...");

    let mut sink = MemorySink::new();
    if let Err(err) = execute(config, &mut sink).await {
        handle_error(err, &spinner)?;
    }

    spinner.stop(format!("Rendered {} files", sink.files().len()));

    for file in sink.files() {
        let contents = file.contents.render()?;
        println!();
        println!("{} {}", "==>".blue(), file.name.bold());
        print!("{}", contents);
    }
    println!();

    Ok(())
}

fn print_summary(sink: &FsSink) -> Result<()> {
    for path in sink.written() {
        let name = path
            .strip_prefix(sink.out_dir())
            .unwrap_or(path)
            .display()
            .to_string();
        cliclack::log::success(format!("{} {}", "+".green(), name))?;
    }

    if sink.kept_existing_manifest() && !sink.dev_dependencies().is_empty() {
        cliclack::log::warning(format!(
            "package.json already exists and was left unchanged. Add these devDependencies:\n{}",
            format_dependencies(sink.dev_dependencies())
        ))?;
    }

    cliclack::outro("Run your package manager's install command to fetch the new dependencies")?;
    Ok(())
}

fn format_dependencies(dependencies: &BTreeMap<String, String>) -> String {
    dependencies
        .iter()
        .map(|(name, version)| format!("  {}@{}", name, version.dimmed()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bundler, Linter};

    #[test]
    fn test_describe() {
        assert_eq!(describe(Some(Linter::Oxlint)), "oxlint");
        assert_eq!(describe::<Bundler>(None), "none");
    }

    #[tokio::test]
    async fn test_resolve_config_layers() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("configurator.yaml");
        std::fs::write(&file, "linter: oxlint\nbundler: tsdown\n").unwrap();

        let args = GenerateArgs {
            config_file: Some(file),
            overrides: ConfigOverrides {
                bundler: Some(None),
                ..Default::default()
            },
            ..Default::default()
        };

        let config = resolve_config(&args).await.unwrap();

        assert_eq!(config.linter, Some(Linter::Oxlint));
        assert_eq!(config.bundler, None);
        assert_eq!(config.main_entry_point, "src/main.ts");
    }

    #[tokio::test]
    async fn test_ensure_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ensure_out_dir(dir.path()).await.is_ok());

        let missing = dir.path().join("missing");
        let err = ensure_out_dir(&missing).await.unwrap_err();
        assert!(err.to_string().starts_with("Output directory does not exist"));

        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(ensure_out_dir(&file).await.is_err());
    }
}
