//! Vitest config (`vitest.config.ts` or `vitest.config.js`)

use super::js_array;
use crate::config::{Config, TestFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde_json::json;

fn file_name(config: &Config) -> &'static str {
    if config.typescript {
        "vitest.config.ts"
    } else {
        "vitest.config.js"
    }
}

fn render(config: &Config) -> String {
    format!(
        "import {{ defineConfig }} from 'vitest/config'\n\nexport default defineConfig({{\n  test: {{\n    include: {}\n  }}\n}});",
        js_array(&config.tests, ",")
    )
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.test_framework != Some(TestFramework::Vitest) {
        return Ok(());
    }

    sink.add_dev_dependency("vitest", "^4.0.16");
    sink.emit_package_field("scripts", json!({ "test": "vitest" }));

    sink.emit_file(GeneratedFile::text(file_name(config), render(config)))
        .await
}
