//! Prettier config (`.prettierrc.json`)

use super::to_json;
use crate::config::{Config, Formatter, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

const FILE_NAME: &str = ".prettierrc.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PrettierConfig {
    bracket_spacing: bool,
    print_width: u32,
    semi: bool,
    single_quote: bool,
    tab_width: u32,
    trailing_comma: &'static str,
    use_tabs: bool,
    arrow_parens: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    plugins: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    overrides: Vec<Override>,
}

#[derive(Debug, Serialize)]
struct Override {
    files: &'static str,
    options: Value,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            bracket_spacing: false,
            print_width: 120,
            semi: true,
            single_quote: true,
            tab_width: 2,
            trailing_comma: "none",
            use_tabs: false,
            arrow_parens: "always",
            plugins: Vec::new(),
            overrides: Vec::new(),
        }
    }
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.formatter != Some(Formatter::Prettier) {
        return Ok(());
    }

    sink.add_dev_dependency("prettier", "^3.7.4");

    let mut prettier = PrettierConfig::default();
    if config.ui_framework == Some(UiFramework::Svelte) {
        sink.add_dev_dependency("prettier-plugin-svelte", "^3.4.1");
        prettier.plugins.push("prettier-plugin-svelte");
        prettier.overrides.push(Override {
            files: "*.svelte",
            options: serde_json::json!({ "parser": "svelte" }),
        });
    }

    let contents = to_json(FILE_NAME, &prettier)?;
    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{base_config, sink};
    use serde_json::json;

    #[tokio::test]
    async fn test_does_nothing_for_other_formatters() {
        let mut config = base_config();
        config.formatter = Some(Formatter::Oxfmt);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_base_config() {
        let mut config = base_config();
        config.formatter = Some(Formatter::Prettier);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert_eq!(sink.dev_dependencies()["prettier"], "^3.7.4");
        assert_eq!(sink.file_names(), vec![FILE_NAME]);
        assert_eq!(
            sink.file(FILE_NAME).unwrap().as_json().unwrap(),
            &json!({
                "bracketSpacing": false,
                "printWidth": 120,
                "semi": true,
                "singleQuote": true,
                "tabWidth": 2,
                "trailingComma": "none",
                "useTabs": false,
                "arrowParens": "always"
            })
        );
    }

    #[tokio::test]
    async fn test_svelte_plugin() {
        let mut config = base_config();
        config.formatter = Some(Formatter::Prettier);
        config.ui_framework = Some(UiFramework::Svelte);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        let value = sink.file(FILE_NAME).unwrap().as_json().unwrap();
        assert_eq!(value["plugins"], json!(["prettier-plugin-svelte"]));
        assert_eq!(
            value["overrides"],
            json!([{"files": "*.svelte", "options": {"parser": "svelte"}}])
        );
        assert_eq!(sink.dev_dependencies()["prettier-plugin-svelte"], "^3.4.1");
    }
}
