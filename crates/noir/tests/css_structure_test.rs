//! Structure assertions over the hand-written CSS modules.
//!
//! These tests do not build anything; they check that the source tree under
//! `css/` keeps its shape: every expected module exists and is imported by
//! the entry, braces balance, and every token a module consumes is defined
//! by the base module.

use std::fs;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;

const EXPECTED_MODULES: &[&str] = &[
    "base.css",
    "typography.css",
    "layout.css",
    "forms.css",
    "components.css",
    "navigation.css",
    "utilities.css",
    "animations.css",
    "states.css",
];

static MODULE_IMPORT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"@import\s+["']modules/([^"']+)["'];"#).unwrap());
static TOKEN_DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--([a-zA-Z0-9-]+)\s*:").unwrap());
static TOKEN_USAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"var\(--([a-zA-Z0-9-]+)").unwrap());

fn css_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../css")
}

fn read_module(name: &str) -> String {
    fs::read_to_string(css_dir().join("modules").join(name))
        .unwrap_or_else(|_| panic!("module {name} should exist"))
}

/// Strip comments and string literals so brace counting is not fooled.
fn strip_noise(css: &str) -> String {
    static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
    static STRING: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*"|'[^']*'"#).unwrap());
    STRING
        .replace_all(&COMMENT.replace_all(css, ""), "")
        .into_owned()
}

#[test]
fn test_all_expected_modules_exist() {
    for module in EXPECTED_MODULES {
        assert!(
            css_dir().join("modules").join(module).is_file(),
            "missing module {module}"
        );
    }
}

#[test]
fn test_entry_imports_every_module() {
    let entry = fs::read_to_string(css_dir().join("noir.css")).unwrap();
    let imported: Vec<&str> = MODULE_IMPORT
        .captures_iter(&entry)
        .map(|c| c.get(1).unwrap().as_str())
        .collect();

    assert!(!imported.is_empty());
    for module in EXPECTED_MODULES {
        assert!(
            imported.contains(module),
            "entry does not import {module}"
        );
    }
}

#[test]
fn test_no_module_is_empty() {
    for module in EXPECTED_MODULES {
        let content = read_module(module);
        assert!(
            content.trim().len() > 50,
            "module {module} is suspiciously small"
        );
    }
}

#[test]
fn test_braces_balance_in_every_module() {
    for module in EXPECTED_MODULES {
        let cleaned = strip_noise(&read_module(module));
        let opens = cleaned.matches('{').count();
        let closes = cleaned.matches('}').count();
        assert_eq!(opens, closes, "unbalanced braces in {module}");
    }
}

#[test]
fn test_base_defines_core_tokens() {
    let base = read_module("base.css");
    for token in ["--noir-bg", "--noir-ink", "--noir-accent", "--noir-radius"] {
        assert!(base.contains(token), "base.css missing {token}");
    }
    // Dark-first with a light override block
    assert!(base.contains("[data-theme=\"light\"]"));
}

#[test]
fn test_every_consumed_token_is_defined() {
    let base = read_module("base.css");
    let defined: Vec<String> = TOKEN_DEFINITION
        .captures_iter(&base)
        .map(|c| c.get(1).unwrap().as_str().to_string())
        .collect();

    for module in EXPECTED_MODULES {
        let content = read_module(module);
        for usage in TOKEN_USAGE.captures_iter(&content) {
            let token = usage.get(1).unwrap().as_str();
            assert!(
                defined.iter().any(|d| d == token),
                "{module} uses undefined token --{token}"
            );
        }
    }
}
