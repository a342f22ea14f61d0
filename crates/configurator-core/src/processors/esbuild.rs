//! esbuild bundler, driven by a build script (`esbuild.config.mjs`)

use super::{emit_build_fields, entry_point, entry_stem, js_array, js_string};
use crate::config::{Bundler, Config, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;

const FILE_NAME: &str = "esbuild.config.mjs";

fn render(config: &Config, entry: &str, output: &str) -> String {
    let mut imports = vec!["import * as esbuild from 'esbuild';"];
    let mut options = vec![
        format!("entryPoints: {}", js_array(&[entry], ",")),
        "bundle: true".to_string(),
        "format: 'esm'".to_string(),
        "platform: 'neutral'".to_string(),
    ];

    match config.ui_framework {
        Some(UiFramework::Vue) => {
            imports.push("import vue from 'unplugin-vue/esbuild';");
            options.push("plugins: [vue()]".to_string());
        }
        Some(UiFramework::Svelte) => {
            imports.push("import sveltePlugin from 'esbuild-svelte';");
            options.push("plugins: [sveltePlugin()]".to_string());
        }
        _ => {}
    }

    options.push(format!("outfile: {}", js_string(output)));

    format!(
        "{}\n\nawait esbuild.build({{\n  {}\n}});",
        imports.join("\n"),
        options.join(",\n  ")
    )
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.bundler != Some(Bundler::Esbuild) {
        return Ok(());
    }
    let Some(entry) = entry_point(config) else {
        return Ok(());
    };

    sink.add_dev_dependency("esbuild", "^0.27.2");
    match config.ui_framework {
        Some(UiFramework::Vue) => sink.add_dev_dependency("unplugin-vue", "^6.2.0"),
        Some(UiFramework::Svelte) => sink.add_dev_dependency("esbuild-svelte", "^0.9.3"),
        _ => {}
    }

    let main = format!("dist/{}.mjs", entry_stem(entry));
    emit_build_fields(sink, &main, "node esbuild.config.mjs");

    sink.emit_file(GeneratedFile::text(FILE_NAME, render(config, entry, &main)))
        .await
}
