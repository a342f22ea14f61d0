//! tsdown bundler (`tsdown.config.ts`)

use super::{emit_build_fields, entry_point, entry_stem, js_array};
use crate::config::{Bundler, Config, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;

const FILE_NAME: &str = "tsdown.config.ts";

fn render(config: &Config, entry: &str) -> String {
    let mut imports = vec!["import { defineConfig } from 'tsdown'"];
    let mut options = vec![format!("entry: {}", js_array(&[entry], ","))];

    let framework_options: &[&str] = match config.ui_framework {
        Some(UiFramework::Vue) => {
            imports.push("import vue from 'unplugin-vue/rolldown'");
            &[
                "platform: 'neutral'",
                "plugins: [vue({ isProduction: true })]",
                "dts: { vue: true }",
            ]
        }
        Some(UiFramework::React) => &["platform: 'neutral'", "dts: true"],
        Some(UiFramework::Svelte) => {
            imports.push("import svelte from 'rollup-plugin-svelte'");
            imports.push("import { sveltePreprocess } from 'svelte-preprocess'");
            &[
                "platform: 'neutral'",
                "plugins: [svelte({ preprocess: sveltePreprocess() })]",
            ]
        }
        _ => &["dts: true"],
    };
    options.extend(framework_options.iter().map(|option| option.to_string()));

    format!(
        "{}\n\nexport default defineConfig({{\n  {}\n}})",
        imports.join("\n"),
        options.join(",\n  ")
    )
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.bundler != Some(Bundler::Tsdown) {
        return Ok(());
    }
    let Some(entry) = entry_point(config) else {
        return Ok(());
    };

    sink.add_dev_dependency("tsdown", "^0.18.4");
    match config.ui_framework {
        Some(UiFramework::Vue) => sink.add_dev_dependency("unplugin-vue", "^6.2.0"),
        Some(UiFramework::Svelte) => {
            sink.add_dev_dependency("rollup-plugin-svelte", "^7.2.3");
            sink.add_dev_dependency("svelte-preprocess", "^6.0.3");
        }
        _ => {}
    }

    let main = format!("dist/{}.mjs", entry_stem(entry));
    emit_build_fields(sink, &main, "tsdown");

    sink.emit_file(GeneratedFile::text(FILE_NAME, render(config, entry)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{base_config, sink};
    use serde_json::json;

    fn tsdown_config() -> Config {
        let mut config = base_config();
        config.bundler = Some(Bundler::Tsdown);
        config
    }

    #[tokio::test]
    async fn test_does_nothing_without_entry_point() {
        let mut config = tsdown_config();
        config.main_entry_point = String::new();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_does_nothing_for_other_bundlers() {
        let mut config = tsdown_config();
        config.bundler = Some(Bundler::Rolldown);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_default_config() {
        let mut config = tsdown_config();
        config.main_entry_point = "src/foo/bar.ts".to_string();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert_eq!(
            sink.file(FILE_NAME).unwrap().as_text().unwrap(),
            "import { defineConfig } from 'tsdown'

export default defineConfig({
  entry: [\"src/foo/bar.ts\"],
  dts: true
})"
        );
        let fields = sink.package_fields();
        assert_eq!(fields["main"], "dist/bar.mjs");
        assert_eq!(fields["exports"], json!({".": "dist/bar.mjs"}));
        assert_eq!(fields["scripts"], json!({"build": "tsdown"}));
        assert_eq!(sink.dev_dependencies()["tsdown"], "^0.18.4");
    }

    #[tokio::test]
    async fn test_entry_point_is_trimmed() {
        let mut config = tsdown_config();
        config.main_entry_point = " src/main.ts ".to_string();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        let text = sink.file(FILE_NAME).unwrap().as_text().unwrap();
        assert!(text.contains("entry: [\"src/main.ts\"]"));
        assert_eq!(sink.package_fields()["main"], "dist/main.mjs");
    }

    #[tokio::test]
    async fn test_vue_config() {
        let mut config = tsdown_config();
        config.ui_framework = Some(UiFramework::Vue);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert_eq!(
            sink.file(FILE_NAME).unwrap().as_text().unwrap(),
            "import { defineConfig } from 'tsdown'
import vue from 'unplugin-vue/rolldown'

export default defineConfig({
  entry: [\"src/main.ts\"],
  platform: 'neutral',
  plugins: [vue({ isProduction: true })],
  dts: { vue: true }
})"
        );
        assert_eq!(sink.dev_dependencies()["unplugin-vue"], "^6.2.0");
    }

    #[tokio::test]
    async fn test_svelte_config() {
        let mut config = tsdown_config();
        config.ui_framework = Some(UiFramework::Svelte);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        let text = sink.file(FILE_NAME).unwrap().as_text().unwrap();
        assert!(text.contains("import { sveltePreprocess } from 'svelte-preprocess'"));
        assert!(text.contains("plugins: [svelte({ preprocess: sveltePreprocess() })]"));
        assert!(!text.contains("dts"));
        assert_eq!(sink.dev_dependencies()["rollup-plugin-svelte"], "^7.2.3");
        assert_eq!(sink.dev_dependencies()["svelte-preprocess"], "^6.0.3");
    }

    #[tokio::test]
    async fn test_react_config() {
        let mut config = tsdown_config();
        config.ui_framework = Some(UiFramework::React);
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        let text = sink.file(FILE_NAME).unwrap().as_text().unwrap();
        assert!(text.ends_with("  platform: 'neutral',\n  dts: true\n})"));
    }
}
