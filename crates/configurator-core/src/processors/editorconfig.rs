//! `.editorconfig`, written whenever a formatter is selected

use crate::config::Config;
use crate::sink::{GeneratedFile, Sink};
use anyhow::Result;

const FILE_NAME: &str = ".editorconfig";

const EDITORCONFIG: &str = "root = true

[*]
end_of_line = lf
indent_size = 2
indent_style = space
trim_trailing_whitespace = true
insert_final_newline = true";

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.formatter.is_none() {
        return Ok(());
    }

    sink.emit_file(GeneratedFile::text(FILE_NAME, EDITORCONFIG))
        .await
}
