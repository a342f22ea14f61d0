//! Rolldown bundler (`rolldown.config.mjs`)

use super::{emit_build_fields, entry_point, entry_stem, js_string};
use crate::config::{Bundler, Config, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;

const FILE_NAME: &str = "rolldown.config.mjs";

fn render(config: &Config, entry: &str, output: &str) -> String {
    let mut imports = vec!["import { defineConfig } from 'rolldown';"];
    let mut options = vec![format!("input: {}", js_string(entry))];

    match config.ui_framework {
        Some(UiFramework::Vue) => {
            imports.push("import vue from 'unplugin-vue/rolldown';");
            options.push("plugins: [vue({ isProduction: true })]".to_string());
        }
        Some(UiFramework::Svelte) => {
            imports.push("import svelte from 'rollup-plugin-svelte';");
            imports.push("import { sveltePreprocess } from 'svelte-preprocess';");
            options.push("plugins: [svelte({ preprocess: sveltePreprocess() })]".to_string());
        }
        _ => {}
    }

    options.push(format!(
        "output: {{\n    file: {},\n    format: 'esm'\n  }}",
        js_string(output)
    ));

    format!(
        "{}\n\nexport default defineConfig({{\n  {}\n}});",
        imports.join("\n"),
        options.join(",\n  ")
    )
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.bundler != Some(Bundler::Rolldown) {
        return Ok(());
    }
    let Some(entry) = entry_point(config) else {
        return Ok(());
    };

    sink.add_dev_dependency("rolldown", "^1.0.0-beta.57");
    match config.ui_framework {
        Some(UiFramework::Vue) => sink.add_dev_dependency("unplugin-vue", "^6.2.0"),
        Some(UiFramework::Svelte) => {
            sink.add_dev_dependency("rollup-plugin-svelte", "^7.2.3");
            sink.add_dev_dependency("svelte-preprocess", "^6.0.3");
        }
        _ => {}
    }

    let main = format!("dist/{}.mjs", entry_stem(entry));
    emit_build_fields(sink, &main, "rolldown -c");

    sink.emit_file(GeneratedFile::text(FILE_NAME, render(config, entry, &main)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{base_config, sink};
    use serde_json::json;

    fn rolldown_config() -> Config {
        let mut config = base_config();
        config.bundler = Some(Bundler::Rolldown);
        config
    }

    #[tokio::test]
    async fn test_does_nothing_without_entry_point() {
        let mut config = rolldown_config();
        config.main_entry_point = "  ".to_string();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_does_nothing_for_other_bundlers() {
        let mut config = rolldown_config();
        config.bundler = Some(Bundler::Esbuild);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_default_config() {
        let mut sink = sink();

        process(&rolldown_config(), &mut sink).await.unwrap();

        assert_eq!(
            sink.file(FILE_NAME).unwrap().as_text().unwrap(),
            "import { defineConfig } from 'rolldown';

export default defineConfig({
  input: \"src/main.ts\",
  output: {
    file: \"dist/main.mjs\",
    format: 'esm'
  }
});"
        );
        assert_eq!(sink.package_fields()["main"], "dist/main.mjs");
        assert_eq!(sink.package_fields()["scripts"], json!({"build": "rolldown -c"}));
        assert_eq!(sink.dev_dependencies()["rolldown"], "^1.0.0-beta.57");
    }

    #[tokio::test]
    async fn test_entry_point_is_trimmed() {
        let mut config = rolldown_config();
        config.main_entry_point = "\tsrc/main.ts ".to_string();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        let text = sink.file(FILE_NAME).unwrap().as_text().unwrap();
        assert!(text.contains("input: \"src/main.ts\","));
        assert!(text.contains("file: \"dist/main.mjs\","));
    }

    #[tokio::test]
    async fn test_vue_plugin() {
        let mut config = rolldown_config();
        config.ui_framework = Some(UiFramework::Vue);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        let text = sink.file(FILE_NAME).unwrap().as_text().unwrap();
        assert!(text.contains("import vue from 'unplugin-vue/rolldown';"));
        assert!(text.contains("plugins: [vue({ isProduction: true })]"));
        assert_eq!(sink.dev_dependencies()["unplugin-vue"], "^6.2.0");
    }
}
