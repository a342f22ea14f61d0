//! Cross-field validation run before any processor

use crate::catalog;
use crate::config::Config;
use crate::error::ConfigValidationError;

/// Check `config` against the cross-field rules, reporting the first broken one
pub fn validate(config: &Config) -> Result<(), ConfigValidationError> {
    check_globs(&config.sources, "sources", ConfigValidationError::MissingSources)?;
    check_globs(&config.tests, "tests", ConfigValidationError::MissingTests)?;

    if let Some(bundler) = config.bundler {
        if bundler.requires_entry_point() && config.main_entry_point.trim().is_empty() {
            return Err(ConfigValidationError::MissingEntryPoint(bundler));
        }
        if bundler.requires_typescript() && !config.typescript {
            return Err(ConfigValidationError::RequiresTypeScript(bundler));
        }
    }

    if let Some(ui_framework) = config.ui_framework {
        if !catalog::is_bundler_compatible(ui_framework, config.bundler) {
            return Err(match config.bundler {
                Some(bundler) => ConfigValidationError::IncompatibleBundler {
                    ui_framework,
                    bundler,
                },
                None => ConfigValidationError::BundlerRequired(ui_framework),
            });
        }
    }

    Ok(())
}

/// A glob list needs at least one entry and no blank ones
fn check_globs(
    globs: &[String],
    field: &'static str,
    missing: ConfigValidationError,
) -> Result<(), ConfigValidationError> {
    if globs.iter().all(|glob| glob.trim().is_empty()) {
        return Err(missing);
    }
    if globs.iter().any(|glob| glob.trim().is_empty()) {
        return Err(ConfigValidationError::BlankGlob(field));
    }
    Ok(())
}
