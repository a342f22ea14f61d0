//! Configuration model types

use crate::catalog::{self, LabeledOption};
use crate::error::UnknownOption;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Supported linters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    Eslint,
    Oxlint,
    Biome,
}

/// Supported formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formatter {
    Prettier,
    Oxfmt,
    Biome,
}

/// Supported test frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    Jest,
    Mocha,
    Vitest,
}

/// Supported UI frameworks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiFramework {
    React,
    Vue,
    Svelte,
    Lit,
    Angular,
    Preact,
}

/// Supported bundlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bundler {
    Tsdown,
    Zshy,
    /// The TypeScript compiler (`tsgo`) used as the build tool
    Typescript,
    Rolldown,
    Esbuild,
}

impl Bundler {
    /// Bundlers that cannot run without a main entry point
    pub fn requires_entry_point(&self) -> bool {
        matches!(
            self,
            Bundler::Tsdown | Bundler::Zshy | Bundler::Rolldown | Bundler::Esbuild
        )
    }

    /// Bundlers that only work on TypeScript sources
    pub fn requires_typescript(&self) -> bool {
        matches!(self, Bundler::Zshy | Bundler::Typescript)
    }
}

/// Lint rule categories, ordered as they are displayed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LintCategory {
    Correctness,
    Performance,
    Modernization,
}

/// Lint options shared by all linters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default)]
    pub categories: BTreeSet<LintCategory>,
}

impl LintConfig {
    pub fn new(categories: impl IntoIterator<Item = LintCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    pub fn has(&self, category: LintCategory) -> bool {
        self.categories.contains(&category)
    }
}

/// Desired tooling for a generated project.
///
/// Every optional axis left as `None` is not configured at all; there is no
/// "none" value at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Entry source file, relative to the project root
    pub main_entry_point: String,

    /// Globs matching source files
    pub sources: Vec<String>,

    /// Globs matching test files
    pub tests: Vec<String>,

    pub typescript: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linter: Option<Linter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<Formatter>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_framework: Option<TestFramework>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_framework: Option<UiFramework>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bundler: Option<Bundler>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub lint_config: Option<LintConfig>,
}

impl Config {
    /// A config with nothing selected besides the given globs
    pub fn new(
        sources: impl IntoIterator<Item = impl Into<String>>,
        tests: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            main_entry_point: String::new(),
            sources: sources.into_iter().map(Into::into).collect(),
            tests: tests.into_iter().map(Into::into).collect(),
            typescript: false,
            linter: None,
            formatter: None,
            test_framework: None,
            ui_framework: None,
            bundler: None,
            lint_config: None,
        }
    }

    /// Whether a lint category is enabled
    pub fn has_lint_category(&self, category: LintCategory) -> bool {
        self.lint_config
            .as_ref()
            .is_some_and(|lint| lint.has(category))
    }

    /// Source globs followed by test globs
    pub fn sources_and_tests(&self) -> Vec<String> {
        self.sources.iter().chain(&self.tests).cloned().collect()
    }
}

impl Default for Config {
    /// The recommended setup offered by the CLI
    fn default() -> Self {
        Self {
            main_entry_point: "src/main.ts".to_string(),
            sources: vec!["src/**/*.ts".to_string()],
            tests: vec!["src/**/*.test.ts".to_string()],
            typescript: true,
            linter: Some(Linter::Eslint),
            formatter: Some(Formatter::Prettier),
            test_framework: None,
            ui_framework: None,
            bundler: None,
            lint_config: Some(LintConfig::new([
                LintCategory::Correctness,
                LintCategory::Performance,
                LintCategory::Modernization,
            ])),
        }
    }
}

/// Implements `as_str`, `Display` and catalog-backed `FromStr` for a choice enum
macro_rules! choice {
    ($ty:ty, $kind:literal, $options:expr, { $($variant:path => $value:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($variant => $value),+
                }
            }

            /// Selectable values for this axis, in display order
            pub fn options() -> &'static [LabeledOption<$ty>] {
                $options
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                catalog::parse_option($options, s)
                    .ok_or_else(|| UnknownOption::new($kind, s, $options))
            }
        }
    };
}

choice!(Linter, "linter", catalog::LINTERS, {
    Linter::Eslint => "eslint",
    Linter::Oxlint => "oxlint",
    Linter::Biome => "biome",
});

choice!(Formatter, "formatter", catalog::FORMATTERS, {
    Formatter::Prettier => "prettier",
    Formatter::Oxfmt => "oxfmt",
    Formatter::Biome => "biome",
});

choice!(TestFramework, "test framework", catalog::TEST_FRAMEWORKS, {
    TestFramework::Jest => "jest",
    TestFramework::Mocha => "mocha",
    TestFramework::Vitest => "vitest",
});

choice!(UiFramework, "UI framework", catalog::UI_FRAMEWORKS, {
    UiFramework::React => "react",
    UiFramework::Vue => "vue",
    UiFramework::Svelte => "svelte",
    UiFramework::Lit => "lit",
    UiFramework::Angular => "angular",
    UiFramework::Preact => "preact",
});

choice!(Bundler, "bundler", catalog::BUNDLERS, {
    Bundler::Tsdown => "tsdown",
    Bundler::Zshy => "zshy",
    Bundler::Typescript => "typescript",
    Bundler::Rolldown => "rolldown",
    Bundler::Esbuild => "esbuild",
});

choice!(LintCategory, "lint category", catalog::LINT_CATEGORIES, {
    LintCategory::Correctness => "correctness",
    LintCategory::Performance => "performance",
    LintCategory::Modernization => "modernization",
});
