//! Generation processors, one per tooling choice
//!
//! Every processor reads the same `Config` and writes to the same sink. A
//! processor whose tool is not selected must leave the sink untouched, and no
//! processor may depend on another's output.

pub mod biome;
pub mod editorconfig;
pub mod esbuild;
pub mod eslint;
pub mod jest;
pub mod mocha;
pub mod oxfmt;
pub mod oxlint;
pub mod prettier;
pub mod rolldown;
pub mod tsdown;
pub mod typescript;
pub mod vitest;
pub mod zshy;

use crate::config::Config;
use crate::sink::Sink;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::Path;

/// The closed set of processors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Processor {
    Eslint,
    Oxlint,
    Biome,
    Prettier,
    Oxfmt,
    Editorconfig,
    Jest,
    Mocha,
    Vitest,
    Typescript,
    Tsdown,
    Zshy,
    Rolldown,
    Esbuild,
}

/// Every processor, in run order
pub const PROCESSORS: &[Processor] = &[
    Processor::Eslint,
    Processor::Oxlint,
    Processor::Biome,
    Processor::Prettier,
    Processor::Oxfmt,
    Processor::Editorconfig,
    Processor::Jest,
    Processor::Mocha,
    Processor::Vitest,
    Processor::Typescript,
    Processor::Tsdown,
    Processor::Zshy,
    Processor::Rolldown,
    Processor::Esbuild,
];

impl Processor {
    pub fn name(&self) -> &'static str {
        match self {
            Processor::Eslint => "eslint",
            Processor::Oxlint => "oxlint",
            Processor::Biome => "biome",
            Processor::Prettier => "prettier",
            Processor::Oxfmt => "oxfmt",
            Processor::Editorconfig => "editorconfig",
            Processor::Jest => "jest",
            Processor::Mocha => "mocha",
            Processor::Vitest => "vitest",
            Processor::Typescript => "typescript",
            Processor::Tsdown => "tsdown",
            Processor::Zshy => "zshy",
            Processor::Rolldown => "rolldown",
            Processor::Esbuild => "esbuild",
        }
    }

    /// Run this processor against `config`, writing into `sink`
    pub async fn run<S: Sink>(&self, config: &Config, sink: &mut S) -> Result<()> {
        match self {
            Processor::Eslint => eslint::process(config, sink).await,
            Processor::Oxlint => oxlint::process(config, sink).await,
            Processor::Biome => biome::process(config, sink).await,
            Processor::Prettier => prettier::process(config, sink).await,
            Processor::Oxfmt => oxfmt::process(config, sink).await,
            Processor::Editorconfig => editorconfig::process(config, sink).await,
            Processor::Jest => jest::process(config, sink).await,
            Processor::Mocha => mocha::process(config, sink).await,
            Processor::Vitest => vitest::process(config, sink).await,
            Processor::Typescript => typescript::process(config, sink).await,
            Processor::Tsdown => tsdown::process(config, sink).await,
            Processor::Zshy => zshy::process(config, sink).await,
            Processor::Rolldown => rolldown::process(config, sink).await,
            Processor::Esbuild => esbuild::process(config, sink).await,
        }
    }
}

/// Serialize a generated config struct into a JSON value
pub(crate) fn to_json<T: Serialize>(name: &str, config: &T) -> Result<Value> {
    serde_json::to_value(config).with_context(|| format!("Failed to serialize {}", name))
}

/// Quote a string as a JavaScript/JSON string literal
pub(crate) fn js_string(value: &str) -> String {
    // Serializing a str cannot fail
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}

/// Render strings as an inline JavaScript array, e.g. `["a", "b"]`
pub(crate) fn js_array<S: AsRef<str>>(values: &[S], separator: &str) -> String {
    let items: Vec<String> = values.iter().map(|v| js_string(v.as_ref())).collect();
    format!("[{}]", items.join(separator))
}

/// The configured entry point, trimmed, or `None` when it is blank
pub(crate) fn entry_point(config: &Config) -> Option<&str> {
    Some(config.main_entry_point.trim()).filter(|entry| !entry.is_empty())
}

/// File name of the entry point without its extension: `src/foo/bar.ts` -> `bar`
pub(crate) fn entry_stem(entry_point: &str) -> &str {
    let file_name = entry_point.rsplit('/').next().unwrap_or(entry_point);
    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
}

/// Contribute `main`, `exports` and `scripts.build` for a bundled entry point
pub(crate) fn emit_build_fields<S: Sink>(sink: &mut S, main: &str, build: &str) {
    sink.emit_package_field("main", json!(main));
    sink.emit_package_field("exports", json!({ ".": main }));
    sink.emit_package_field("scripts", json!({ "build": build }));
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_processor_runs_once() {
        let unique: HashSet<_> = PROCESSORS.iter().collect();
        assert_eq!(unique.len(), PROCESSORS.len());
        assert_eq!(PROCESSORS.len(), 14);
    }

    #[test]
    fn test_entry_point_is_trimmed() {
        let mut config = test_support::base_config();
        config.main_entry_point = " src/main.ts\n".to_string();
        assert_eq!(entry_point(&config), Some("src/main.ts"));

        config.main_entry_point = " \t ".to_string();
        assert_eq!(entry_point(&config), None);
    }

    #[test]
    fn test_entry_stem() {
        assert_eq!(entry_stem("src/foo/bar.ts"), "bar");
        assert_eq!(entry_stem("index.ts"), "index");
        assert_eq!(entry_stem("src/app.tsx"), "app");
        assert_eq!(entry_stem("src/main"), "main");
    }

    #[test]
    fn test_js_array() {
        assert_eq!(js_array(&["a", "b"], ", "), r#"["a", "b"]"#);
        assert_eq!(js_array(&["src/{a,b}.ts"], ","), r#"["src/{a,b}.ts"]"#);
        assert_eq!(js_array::<&str>(&[], ","), "[]");
    }
}
