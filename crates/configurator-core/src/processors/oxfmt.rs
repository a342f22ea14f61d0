//! oxfmt config (`.oxfmtrc.jsonc`)

use super::to_json;
use crate::config::{Config, Formatter};
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;
use serde::Serialize;

const FILE_NAME: &str = ".oxfmtrc.jsonc";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OxfmtConfig {
    arrow_parentheses: &'static str,
    line_width: u32,
    quote_style: &'static str,
    semi: bool,
    trailing_commas: &'static str,
}

const OXFMT_CONFIG: OxfmtConfig = OxfmtConfig {
    arrow_parentheses: "always",
    line_width: 120,
    quote_style: "single",
    semi: true,
    trailing_commas: "none",
};

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.formatter != Some(Formatter::Oxfmt) {
        return Ok(());
    }

    sink.add_dev_dependency("oxfmt", "^0.20.0");

    let contents = to_json(FILE_NAME, &OXFMT_CONFIG)?;
    sink.emit_file(GeneratedFile::json(FILE_NAME, contents))
        .await
}
