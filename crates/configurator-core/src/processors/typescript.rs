//! `tsconfig.json`, plus the `tsgo` build when TypeScript is the bundler

use super::{emit_build_fields, to_json};
use crate::config::{Bundler, Config, UiFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;

const FILE_NAME: &str = "tsconfig.json";

#[derive(Debug, Serialize)]
struct TsConfig<'a> {
    extends: &'static str,
    #[serde(rename = "compilerOptions")]
    compiler_options: CompilerOptions,
    include: &'a [String],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompilerOptions {
    module: &'static str,
    target: &'static str,
    types: Vec<String>,
    out_dir: &'static str,
    declaration: bool,
    source_map: bool,
    erasable_syntax_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    jsx: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    jsx_import_source: Option<&'static str>,
}

impl CompilerOptions {
    fn for_ui(ui_framework: Option<UiFramework>) -> Self {
        let (jsx, jsx_import_source) = match ui_framework {
            Some(UiFramework::React) => (Some("react-jsx"), None),
            Some(UiFramework::Preact) => (Some("react-jsx"), Some("preact")),
            _ => (None, None),
        };

        Self {
            module: "node18",
            target: "esnext",
            types: Vec::new(),
            out_dir: "dist",
            declaration: true,
            source_map: false,
            erasable_syntax_only: true,
            jsx,
            jsx_import_source,
        }
    }
}

/// Compiled output path for an entry point: `src/foo/bar.ts` -> `dist/foo/bar.js`.
///
/// The first directory is replaced by `dist`. Returns `None` when the entry
/// has no directory segment.
fn compiled_entry(entry_point: &str) -> Option<String> {
    let (_, rest) = entry_point.trim().split_once('/')?;
    if rest.is_empty() {
        return None;
    }

    let output = match rest.rsplit_once('.') {
        Some((stem, "ts" | "tsx" | "mts")) => {
            let extension = if rest.ends_with(".mts") { "mjs" } else { "js" };
            format!("{}.{}", stem, extension)
        }
        _ => rest.to_string(),
    };
    Some(format!("dist/{}", output))
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if !config.typescript {
        return Ok(());
    }

    if config.bundler == Some(Bundler::Typescript) {
        match compiled_entry(&config.main_entry_point) {
            Some(main) => emit_build_fields(sink, &main, "tsgo"),
            None => tracing::debug!(
                entry = %config.main_entry_point,
                "entry point has no directory, skipping package build fields"
            ),
        }
    }

    sink.add_dev_dependency("@typescript/native-preview", "^7.0.0-dev.20260101.1");
    sink.add_dev_dependency("@tsconfig/strictest", "^2.0.8");

    let tsconfig = TsConfig {
        extends: "@tsconfig/strictest/tsconfig.json",
        compiler_options: CompilerOptions::for_ui(config.ui_framework),
        include: &config.sources,
    };
    let contents = to_json(FILE_NAME, &tsconfig)?;

    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}
