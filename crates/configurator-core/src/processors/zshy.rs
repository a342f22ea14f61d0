//! zshy bundler, configured entirely through `package.json`

use super::{entry_point, to_json};
use crate::config::{Bundler, Config};
use crate::sink::Sink;
use anyhow::Result;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

/// The `zshy` field of `package.json`
#[derive(Debug, Serialize)]
struct ZshyConfig<'a> {
    exports: BTreeMap<&'static str, &'a str>,
    cjs: bool,
}

pub async fn process<S: Sink>(config: &Config, sink: &mut S) -> Result<()> {
    if config.bundler != Some(Bundler::Zshy) {
        return Ok(());
    }
    let Some(entry) = entry_point(config) else {
        return Ok(());
    };

    sink.add_dev_dependency("zshy", "^0.7.0");

    let zshy = ZshyConfig {
        exports: BTreeMap::from([(".", entry)]),
        cjs: false,
    };
    sink.emit_package_field("zshy", to_json("zshy package field", &zshy)?);
    sink.emit_package_field("scripts", json!({ "build": "zshy" }));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::test_support::{base_config, sink};

    #[tokio::test]
    async fn test_does_nothing_for_other_bundlers() {
        let mut config = base_config();
        config.bundler = Some(Bundler::Tsdown);
        config.typescript = true;
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_does_nothing_without_entry_point() {
        let mut config = base_config();
        config.bundler = Some(Bundler::Zshy);
        config.main_entry_point = String::new();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.is_untouched());
    }

    #[tokio::test]
    async fn test_package_fields() {
        let mut config = base_config();
        config.bundler = Some(Bundler::Zshy);
        config.typescript = true;
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert!(sink.files().is_empty());
        assert_eq!(sink.dev_dependencies()["zshy"], "^0.7.0");
        assert_eq!(
            sink.package_fields()["zshy"],
            json!({"exports": {".": "src/main.ts"}, "cjs": false})
        );
        assert_eq!(sink.package_fields()["scripts"], json!({"build": "zshy"}));
    }

    #[tokio::test]
    async fn test_entry_point_is_trimmed() {
        let mut config = base_config();
        config.bundler = Some(Bundler::Zshy);
        config.typescript = true;
        config.main_entry_point = " src/main.ts\n".to_string();
        let mut sink = sink();

        process(&config, &mut sink).await.unwrap();

        assert_eq!(
            sink.package_fields()["zshy"]["exports"],
            json!({".": "src/main.ts"})
        );
    }
}
