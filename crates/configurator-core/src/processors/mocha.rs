//! Mocha config (`.mocharc.json`)

use super::to_json;
use crate::config::{Config, TestFramework};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;
use serde_json::json;

const FILE_NAME: &str = ".mocharc.json";

#[derive(Debug, Serialize)]
struct MochaConfig<'a> {
    spec: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    extension: Option<[&'static str; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    require: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    loader: Option<&'static str>,
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.test_framework != Some(TestFramework::Mocha) {
        return Ok(());
    }

    sink.add_dev_dependency("mocha", "^11.7.5");
    sink.emit_package_field("scripts", json!({ "test": "mocha" }));

    let mut mocha = MochaConfig {
        spec: &config.tests,
        extension: None,
        require: None,
        loader: None,
    };

    // Tests run through ts-node's ESM loader
    if config.typescript {
        sink.add_dev_dependency("ts-node", "^10.9.2");
        mocha.extension = Some(["ts"]);
        mocha.require = Some("ts-node/register");
        mocha.loader = Some("ts-node/esm");
    }

    let contents = to_json(FILE_NAME, &mocha)?;
    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}
