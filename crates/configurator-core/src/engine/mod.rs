//! Execution engine: validate, run every processor, finalise the sink

mod validate;

pub use validate::validate;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::processors::PROCESSORS;
use crate::sink::Sink;

/// Generate tooling configuration for `config` into `sink`.
///
/// Validation happens first; a rejected config never touches the sink. Every
/// processor then runs once, in order, and the sink is finalised exactly once.
pub async fn execute<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if let Err(err) = validate(config) {
        tracing::warn!(error = %err, "configuration rejected");
        return Err(Error::Validation(err));
    }

    for processor in PROCESSORS {
        tracing::debug!(processor = processor.name(), "running processor");
        if let Err(err) = processor.run(config, sink).await {
            tracing::error!(processor = processor.name(), error = %err, "processor failed");
            return Err(Error::Sink(err));
        }
    }

    sink.finalise().await.map_err(Error::Sink)?;

    tracing::info!(processors = PROCESSORS.len(), "configuration generated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        Bundler, Formatter, LintCategory, LintConfig, Linter, TestFramework, UiFramework,
    };
    use crate::error::ConfigValidationError;
    use crate::sink::{GeneratedFile, MemorySink};
    use anyhow::anyhow;
    use serde_json::{json, Value};

    fn minimal() -> Config {
        let mut config = Config::new(["src/**/*.ts"], ["src/**/*.test.ts"]);
        config.main_entry_point = "src/main.ts".to_string();
        config.typescript = true;
        config
    }

    async fn run(config: &Config) -> MemorySink {
        let mut sink = MemorySink::new();
        execute(config, &mut sink).await.unwrap();
        sink
    }

    /// Sink that fails on the first file it is given
    #[derive(Default)]
    struct FailingSink {
        finalised: bool,
    }

    impl Sink for FailingSink {
        async fn emit_file(&mut self, file: GeneratedFile) -> anyhow::Result<()> {
            Err(anyhow!("disk full while writing {}", file.name))
        }

        fn add_dependency(&mut self, _name: &str, _version: &str) {}

        fn add_dev_dependency(&mut self, _name: &str, _version: &str) {}

        fn emit_package_field(&mut self, _name: &str, _value: Value) {}

        async fn finalise(&mut self) -> anyhow::Result<()> {
            self.finalised = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_minimal_typescript_project() {
        let mut config = minimal();
        config.linter = Some(Linter::Oxlint);
        config.lint_config = Some(LintConfig::new([LintCategory::Correctness]));

        let sink = run(&config).await;

        assert_eq!(
            sink.file_names(),
            vec![".oxlintrc.json", "tsconfig.json", "package.json"]
        );
        assert!(sink.dependencies().is_empty());
        assert!(!sink.dev_dependencies().is_empty());
        assert!(sink.is_finalised());
    }

    #[tokio::test]
    async fn test_nothing_selected_still_finalises() {
        let mut config = minimal();
        config.typescript = false;

        let sink = run(&config).await;

        assert_eq!(sink.file_names(), vec!["package.json"]);
        let package = sink.file("package.json").unwrap().as_json().unwrap();
        assert_eq!(package["devDependencies"], json!({}));
    }

    #[tokio::test]
    async fn test_validation_leaves_sink_untouched() {
        let mut config = minimal();
        config.bundler = Some(Bundler::Tsdown);
        config.main_entry_point.clear();
        let mut sink = MemorySink::new();

        let err = execute(&config, &mut sink).await.unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            err.as_validation(),
            Some(&ConfigValidationError::MissingEntryPoint(Bundler::Tsdown))
        );
        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_incompatible_ui_framework_rejected() {
        let mut config = minimal();
        config.ui_framework = Some(UiFramework::Vue);
        config.bundler = None;
        let mut sink = MemorySink::new();

        let err = execute(&config, &mut sink).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "UI framework \"vue\" requires a bundler to be selected"
        );
        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_sink_errors_propagate() {
        let mut config = minimal();
        config.formatter = Some(Formatter::Prettier);
        let mut sink = FailingSink::default();

        let err = execute(&config, &mut sink).await.unwrap_err();

        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "disk full while writing .prettierrc.json");
        assert!(!sink.finalised);
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let mut config = minimal();
        config.linter = Some(Linter::Eslint);
        config.formatter = Some(Formatter::Biome);
        config.test_framework = Some(TestFramework::Vitest);
        config.ui_framework = Some(UiFramework::React);
        config.bundler = Some(Bundler::Tsdown);

        let first = run(&config).await;
        let second = run(&config).await;

        assert_eq!(first.files(), second.files());
        assert_eq!(first.dev_dependencies(), second.dev_dependencies());
    }

    #[tokio::test]
    async fn test_processors_merge_scripts() {
        let mut config = minimal();
        config.test_framework = Some(TestFramework::Jest);
        config.bundler = Some(Bundler::Zshy);

        let sink = run(&config).await;

        let package = sink.file("package.json").unwrap().as_json().unwrap();
        assert_eq!(package["scripts"], json!({"test": "jest", "build": "zshy"}));
        assert_eq!(package["zshy"]["exports"]["."], "src/main.ts");
        assert_eq!(package["name"], "generated-project");
    }
}
