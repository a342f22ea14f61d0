//! ESLint flat config (`eslint.config.mjs`)

use super::js_array;
use crate::config::{Config, LintCategory, Linter, TestFramework, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;

const FILE_NAME: &str = "eslint.config.mjs";

/// Pieces of the generated config, collected before rendering
#[derive(Debug, Default)]
struct EslintConfig {
    imports: Vec<String>,
    extends: Vec<&'static str>,
    /// Plugin key and the imported symbol when it differs from the key
    plugins: Vec<(&'static str, Option<&'static str>)>,
    globals: Vec<&'static str>,
    test_globals: Vec<&'static str>,
    extra_blocks: Vec<String>,
}

impl EslintConfig {
    fn import(&mut self, line: &str) {
        self.imports.push(line.to_string());
    }

    fn render(&self, config: &Config) -> String {
        let mut blocks = self.extra_blocks.clone();
        if !self.test_globals.is_empty() {
            blocks.push(test_block(config, &self.test_globals));
        }

        let mut imports = self.imports.clone();
        if !self.globals.is_empty() || !self.test_globals.is_empty() {
            imports.push("import globals from 'globals';".to_string());
        }

        let language_options = if self.globals.is_empty() {
            String::new()
        } else {
            format!(
                "\n      globals: {{\n        {}\n      }}",
                self.globals.join(",\n        ")
            )
        };

        let plugins: Vec<String> = self
            .plugins
            .iter()
            .map(|(name, symbol)| match symbol {
                Some(symbol) => format!("{}: {}", super::js_string(name), symbol),
                None => name.to_string(),
            })
            .collect();

        let extends = serde_json::to_string_pretty(&self.extends)
            .unwrap_or_default()
            .replace('\n', "\n    ");

        let extra = if blocks.is_empty() {
            String::new()
        } else {
            format!(",{}", blocks.join(","))
        };

        format!(
            "{imports}\n\nexport default defineConfig([\n  {{\n    files: {files},\n    languageOptions: {{{language_options}\n    }},\n    plugins: {{\n      {plugins}\n    }},\n    extends: {extends}\n  }}{extra}\n]);",
            imports = imports.join("\n"),
            files = js_array(&config.sources_and_tests(), ", "),
            language_options = language_options,
            plugins = plugins.join(",\n      "),
            extends = extends,
            extra = extra,
        )
    }
}

fn test_block(config: &Config, test_globals: &[&str]) -> String {
    format!(
        "\n  {{\n    files: {},\n    languageOptions: {{\n      globals: {{\n        {}\n      }}\n    }}\n  }}",
        js_array(&config.tests, ","),
        test_globals.join(",\n        ")
    )
}

fn svelte_block(config: &Config) -> String {
    let (extension, parser_options) = if config.typescript {
        (
            "ts",
            ",\n        projectService: true,\n        extraFileExtensions: ['.svelte'],\n        parser: ts.parser",
        )
    } else {
        ("js", "")
    };

    format!(
        "\n  {{\n    files: ['**/*.svelte', '**/*.svelte.{extension}'],\n    languageOptions: {{\n      parserOptions: {{\n        svelteConfig{parser_options}\n      }}\n    }}\n  }}"
    )
}

fn angular_block() -> String {
    "\n  {\n    files: ['**/*.html'],\n    extends: ['angular/templateRecommended']\n  }".to_string()
}

fn build<S: Sink>(config: &Config, sink: &mut S) -> EslintConfig {
    let mut eslint = EslintConfig::default();
    eslint.import("import {defineConfig} from 'eslint/config';");
    eslint.import("import js from '@eslint/js';");
    eslint.extends.push("js/recommended");
    eslint.plugins.push(("js", None));

    if config.typescript {
        sink.add_dev_dependency("typescript-eslint", "^8.51.0");
        eslint.import("import ts from 'typescript-eslint';");
        eslint.extends.push("ts/flat/strict");
        eslint.plugins.push(("ts", None));
    }

    match config.ui_framework {
        Some(UiFramework::React) => {
            sink.add_dev_dependency("@eslint-react/eslint-plugin", "^2.4.0");
            eslint.import("import eslintReact from '@eslint-react/eslint-plugin';");
            eslint.extends.push(if config.typescript {
                "@eslint-react/recommended-typescript"
            } else {
                "@eslint-react/recommended"
            });
            eslint.plugins.push(("@eslint-react", Some("eslintReact")));
        }
        Some(UiFramework::Vue) => {
            sink.add_dev_dependency("eslint-plugin-vue", "^10.6.2");
            eslint.import("import vue from 'eslint-plugin-vue';");
            eslint.extends.push("vue/flat/recommended");
            eslint.plugins.push(("vue", None));
        }
        Some(UiFramework::Svelte) => {
            sink.add_dev_dependency("eslint-plugin-svelte", "^3.13.1");
            eslint.import("import svelte from 'eslint-plugin-svelte';");
            eslint.import("import svelteConfig from './svelte.config.js';");
            eslint.extends.push("svelte/recommended");
            eslint.plugins.push(("svelte", None));
            eslint.extra_blocks.push(svelte_block(config));
        }
        Some(UiFramework::Lit) => {
            sink.add_dev_dependency("eslint-plugin-lit", "^2.1.1");
            eslint.import("import lit from 'eslint-plugin-lit';");
            eslint.extends.push("lit/flat/recommended");
            eslint.plugins.push(("lit", None));
        }
        Some(UiFramework::Angular) => {
            sink.add_dev_dependency("angular-eslint", "^21.1.0");
            eslint.import("import angular from 'angular-eslint';");
            eslint.extends.push("angular/tsRecommended");
            eslint.plugins.push(("angular", None));
            eslint.extra_blocks.push(angular_block());
        }
        Some(UiFramework::Preact) | None => {}
    }

    if config.ui_framework.is_some() {
        eslint.globals.push("...globals.browser");
    }

    // jest and vitest run fine with explicit imports, only mocha relies on globals
    if config.test_framework == Some(TestFramework::Mocha) {
        eslint.test_globals.push("...globals.mocha");
    }

    if !eslint.globals.is_empty() || !eslint.test_globals.is_empty() {
        sink.add_dev_dependency("globals", "^16.5.0");
    }

    if config.has_lint_category(LintCategory::Performance)
        || config.has_lint_category(LintCategory::Modernization)
    {
        sink.add_dev_dependency("@e18e/eslint-plugin", "^0.1.3");
        eslint.import("import e18e from '@e18e/eslint-plugin';");
        eslint.extends.push("e18e/recommended");
        eslint.plugins.push(("e18e", None));
    }

    eslint
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.linter != Some(Linter::Eslint) {
        return Ok(());
    }

    sink.add_dev_dependency("eslint", "^9.39.2");
    sink.add_dev_dependency("@eslint/js", "^9.39.2");

    let contents = build(config, sink).render(config);

    sink.emit_file(GeneratedFile::text(FILE_NAME, contents))
        .await
}
