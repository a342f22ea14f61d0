//! Biome config (`biome.jsonc`), shared by the linter and formatter choices

use super::to_json;
use crate::config::{Config, Formatter, LintCategory, Linter, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

const FILE_NAME: &str = "biome.jsonc";

#[derive(Debug, Serialize)]
struct BiomeConfig {
    files: Files,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatter: Option<FormatterSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    linter: Option<LinterSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    javascript: Option<JavascriptSection>,
}

#[derive(Debug, Serialize)]
struct Files {
    includes: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormatterSection {
    enabled: bool,
    use_editorconfig: bool,
    bracket_spacing: bool,
}

#[derive(Debug, Serialize)]
struct LinterSection {
    enabled: bool,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    domains: BTreeMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    rules: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
struct JavascriptSection {
    formatter: JavascriptFormatter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JavascriptFormatter {
    quote_style: &'static str,
    trailing_commas: &'static str,
    semicolons: &'static str,
    arrow_parentheses: &'static str,
}

fn linter_section(config: &Config) -> LinterSection {
    let mut domains = BTreeMap::new();
    match config.ui_framework {
        Some(UiFramework::React) | Some(UiFramework::Preact) => {
            domains.insert("react", "recommended");
        }
        Some(UiFramework::Vue) => {
            domains.insert("vue", "recommended");
        }
        _ => {}
    }

    let mut rules = BTreeMap::new();
    if config.has_lint_category(LintCategory::Correctness) {
        for group in ["correctness", "suspicious", "security"] {
            rules.insert(group, "error");
        }
    }
    if config.has_lint_category(LintCategory::Performance) {
        rules.insert("performance", "error");
    }

    LinterSection {
        enabled: true,
        domains,
        rules,
    }
}

fn build(config: &Config) -> BiomeConfig {
    let formats = config.formatter == Some(Formatter::Biome);
    let lints = config.linter == Some(Linter::Biome);

    BiomeConfig {
        files: Files {
            includes: config.sources_and_tests(),
        },
        formatter: formats.then_some(FormatterSection {
            enabled: true,
            use_editorconfig: true,
            bracket_spacing: false,
        }),
        linter: lints.then(|| linter_section(config)),
        javascript: formats.then_some(JavascriptSection {
            formatter: JavascriptFormatter {
                quote_style: "single",
                trailing_commas: "none",
                semicolons: "always",
                arrow_parentheses: "always",
            },
        }),
    }
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.linter != Some(Linter::Biome) && config.formatter != Some(Formatter::Biome) {
        return Ok(());
    }

    sink.add_dev_dependency("@biomejs/biome", "^2.3.10");

    let contents = to_json(FILE_NAME, &build(config))?;
    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintConfig;
    use crate::processors::test_support::{base_config, sink};
    use serde_json::{json, Value};

    async fn run(config: &Config) -> Value {
        let mut sink = sink();
        process(config, &mut sink).await.unwrap();
        assert_eq!(sink.dev_dependencies()["@biomejs/biome"], "^2.3.10");
        sink.file(FILE_NAME).unwrap().as_json().unwrap().clone()
    }

    #[tokio::test]
    async fn test_does_nothing_without_biome() {
        let mut config = base_config();
        config.linter = Some(Linter::Eslint);
        config.formatter = Some(Formatter::Prettier);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_formatter_only() {
        let mut config = base_config();
        config.formatter = Some(Formatter::Biome);

        let value = run(&config).await;

        assert_eq!(
            value,
            json!({
                "files": {"includes": ["src/**/*.ts", "src/**/*.test.ts"]},
                "formatter": {"enabled": true, "useEditorconfig": true, "bracketSpacing": false},
                "javascript": {
                    "formatter": {
                        "quoteStyle": "single",
                        "trailingCommas": "none",
                        "semicolons": "always",
                        "arrowParentheses": "always"
                    }
                }
            })
        );
    }

    #[tokio::test]
    async fn test_linter_only() {
        let mut config = base_config();
        config.linter = Some(Linter::Biome);
        config.ui_framework = Some(UiFramework::Preact);
        config.lint_config = Some(LintConfig::new([
            LintCategory::Correctness,
            LintCategory::Performance,
        ]));

        let value = run(&config).await;

        assert!(value.get("formatter").is_none());
        assert!(value.get("javascript").is_none());
        assert_eq!(
            value["linter"],
            json!({
                "enabled": true,
                "domains": {"react": "recommended"},
                "rules": {
                    "correctness": "error",
                    "performance": "error",
                    "security": "error",
                    "suspicious": "error"
                }
            })
        );
    }

    #[tokio::test]
    async fn test_linter_without_categories() {
        let mut config = base_config();
        config.linter = Some(Linter::Biome);
        config.formatter = Some(Formatter::Biome);
        config.ui_framework = Some(UiFramework::Vue);

        let value = run(&config).await;

        assert_eq!(
            value["linter"],
            json!({"enabled": true, "domains": {"vue": "recommended"}})
        );
        assert!(value.get("formatter").is_some());
    }
}
