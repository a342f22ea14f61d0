//! Jest config (`jest.config.json`)

use super::to_json;
use crate::config::{Config, TestFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;
use serde_json::json;

const FILE_NAME: &str = "jest.config.json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JestConfig<'a> {
    test_match: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    preset: Option<&'static str>,
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.test_framework != Some(TestFramework::Jest) {
        return Ok(());
    }

    sink.add_dev_dependency("jest", "^30.2.0");
    sink.emit_package_field("scripts", json!({ "test": "jest" }));

    let mut jest = JestConfig {
        test_match: &config.tests,
        preset: None,
    };
    if config.typescript {
        sink.add_dev_dependency("ts-jest", "^29.4.6");
        jest.preset = Some("ts-jest");
    }

    let contents = to_json(FILE_NAME, &jest)?;
    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}
