//! Selectable tooling options and their compatibility rules
//!
//! Front-ends build their selection lists from these tables; the engine uses
//! the incompatibility table during validation.

use crate::config::{Bundler, Formatter, LintCategory, Linter, TestFramework, UiFramework};
use std::fmt;

/// A selectable value with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabeledOption<T> {
    pub value: T,
    pub label: &'static str,
}

const fn option<T>(value: T, label: &'static str) -> LabeledOption<T> {
    LabeledOption { value, label }
}

pub const LINTERS: &[LabeledOption<Linter>] = &[
    option(Linter::Eslint, "ESLint"),
    option(Linter::Oxlint, "oxlint"),
    option(Linter::Biome, "Biome"),
];

pub const FORMATTERS: &[LabeledOption<Formatter>] = &[
    option(Formatter::Prettier, "Prettier"),
    option(Formatter::Oxfmt, "oxfmt"),
    option(Formatter::Biome, "Biome"),
];

pub const TEST_FRAMEWORKS: &[LabeledOption<TestFramework>] = &[
    option(TestFramework::Jest, "Jest"),
    option(TestFramework::Mocha, "Mocha"),
    option(TestFramework::Vitest, "Vitest"),
];

pub const UI_FRAMEWORKS: &[LabeledOption<UiFramework>] = &[
    option(UiFramework::React, "React"),
    option(UiFramework::Vue, "Vue"),
    option(UiFramework::Svelte, "Svelte"),
    option(UiFramework::Lit, "Lit"),
    option(UiFramework::Angular, "Angular"),
    option(UiFramework::Preact, "Preact"),
];

pub const BUNDLERS: &[LabeledOption<Bundler>] = &[
    option(Bundler::Tsdown, "tsdown"),
    option(Bundler::Zshy, "zshy"),
    option(Bundler::Typescript, "TypeScript"),
    option(Bundler::Rolldown, "Rolldown"),
    option(Bundler::Esbuild, "esbuild"),
];

pub const LINT_CATEGORIES: &[LabeledOption<LintCategory>] = &[
    option(LintCategory::Correctness, "Correctness"),
    option(LintCategory::Performance, "Performance"),
    option(LintCategory::Modernization, "Modernization"),
];

/// Bundlers each UI framework cannot be built with. `None` stands for
/// "no bundler selected".
pub const INCOMPATIBLE_BUNDLERS: &[(UiFramework, &[Option<Bundler>])] = &[
    (
        UiFramework::Vue,
        &[Some(Bundler::Typescript), Some(Bundler::Zshy), None],
    ),
    (
        UiFramework::Svelte,
        &[Some(Bundler::Typescript), Some(Bundler::Zshy), None],
    ),
    (UiFramework::React, &[]),
    (UiFramework::Preact, &[]),
    (UiFramework::Lit, &[]),
    (UiFramework::Angular, &[]),
];

/// Bundler choices (including no bundler) that `ui_framework` rejects.
/// Empty means no restriction.
pub fn incompatible_bundlers(ui_framework: UiFramework) -> &'static [Option<Bundler>] {
    INCOMPATIBLE_BUNDLERS
        .iter()
        .find(|(ui, _)| *ui == ui_framework)
        .map(|(_, bundlers)| *bundlers)
        .unwrap_or(&[])
}

pub fn is_bundler_compatible(ui_framework: UiFramework, bundler: Option<Bundler>) -> bool {
    !incompatible_bundlers(ui_framework).contains(&bundler)
}

/// Look up an option by its textual value (case-insensitive)
pub fn parse_option<T: Copy + fmt::Display>(options: &[LabeledOption<T>], text: &str) -> Option<T> {
    let text = text.trim();
    options
        .iter()
        .find(|opt| opt.value.to_string().eq_ignore_ascii_case(text))
        .map(|opt| opt.value)
}
