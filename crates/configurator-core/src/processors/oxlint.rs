//! oxlint config (`.oxlintrc.json`)

use super::to_json;
use crate::config::{Config, LintCategory, Linter, TestFramework, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

const FILE_NAME: &str = ".oxlintrc.json";

/// Rules enabled by `eslint-plugin-lit`'s recommended config
const LIT_RECOMMENDED_RULES: &[&str] = &[
    "lit/attribute-value-entities",
    "lit/binding-positions",
    "lit/no-duplicate-template-bindings",
    "lit/no-invalid-escape-sequences",
    "lit/no-invalid-html",
    "lit/no-legacy-template-syntax",
    "lit/no-property-change-update",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OxlintConfig {
    plugins: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    js_plugins: Vec<&'static str>,
    env: BTreeMap<&'static str, bool>,
    rules: BTreeMap<&'static str, &'static str>,
    categories: BTreeMap<&'static str, &'static str>,
}

/// oxlint rule categories switched on by each lint category
fn category_levels(category: LintCategory) -> &'static [(&'static str, &'static str)] {
    match category {
        LintCategory::Correctness => &[("correctness", "error"), ("suspicious", "error")],
        LintCategory::Performance => &[("perf", "error")],
        LintCategory::Modernization => &[],
    }
}

fn build<S: Sink>(config: &Config, sink: &mut S) -> OxlintConfig {
    let mut oxlint = OxlintConfig {
        plugins: vec!["eslint", "oxc"],
        js_plugins: Vec::new(),
        env: BTreeMap::new(),
        rules: BTreeMap::new(),
        categories: BTreeMap::new(),
    };

    if config.typescript {
        oxlint.plugins.push("typescript");
    }

    match config.ui_framework {
        Some(UiFramework::React) | Some(UiFramework::Preact) => {
            oxlint.plugins.push("react");
            if config.has_lint_category(LintCategory::Performance) {
                oxlint.plugins.push("react-perf");
            }
        }
        Some(UiFramework::Vue) => oxlint.plugins.push("vue"),
        Some(UiFramework::Svelte) => {
            sink.add_dev_dependency("eslint-plugin-svelte", "^3.13.1");
            oxlint.js_plugins.push("eslint-plugin-svelte");
        }
        Some(UiFramework::Lit) => {
            sink.add_dev_dependency("eslint-plugin-lit", "^2.1.1");
            oxlint.js_plugins.push("eslint-plugin-lit");
            for &rule in LIT_RECOMMENDED_RULES {
                oxlint.rules.insert(rule, "error");
            }
        }
        Some(UiFramework::Angular) | None => {}
    }

    match config.test_framework {
        Some(TestFramework::Jest) => oxlint.plugins.push("jest"),
        Some(TestFramework::Vitest) => oxlint.plugins.push("vitest"),
        Some(TestFramework::Mocha) => {
            oxlint.env.insert("mocha", true);
        }
        None => {}
    }

    if config.ui_framework.is_some() {
        oxlint.env.insert("browser", true);
    }

    if let Some(lint) = &config.lint_config {
        for category in &lint.categories {
            for &(name, level) in category_levels(*category) {
                oxlint.categories.insert(name, level);
            }
        }
    }

    oxlint
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.linter != Some(Linter::Oxlint) {
        return Ok(());
    }

    sink.add_dev_dependency("oxlint", "^1.35.0");

    let oxlint = build(config, sink);
    let contents = to_json(FILE_NAME, &oxlint)?;

    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}
