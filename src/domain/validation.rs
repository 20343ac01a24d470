//! Coarse structural check of template markup.
//!
//! This is a count-based heuristic, not a parser. Tokens are counted across the
//! whole text, so a `{{` inside a string literal still counts and nesting is
//! never tracked. Both false positives and false negatives are expected.

use std::sync::LazyLock;

use regex::Regex;

static IF_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%-?\s*if\b").expect("if pattern must be valid"));
static IF_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%-?\s*endif\b").expect("endif pattern must be valid"));
static FOR_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%-?\s*for\b").expect("for pattern must be valid"));
static FOR_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%-?\s*endfor\b").expect("endfor pattern must be valid"));

/// Outcome of [`validate`]. `is_valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors }
    }
}

/// Check that expression braces, statement tags, `if`/`endif` and
/// `for`/`endfor` occur in equal numbers. Each mismatch yields one error.
pub fn validate(content: &str) -> ValidationReport {
    let mut errors = Vec::new();

    let (open, close) = (content.matches("{{").count(), content.matches("}}").count());
    if open != close {
        errors.push(format!("Mismatched expression braces: {open} '{{{{' vs {close} '}}}}'"));
    }

    let (open, close) = (content.matches("{%").count(), content.matches("%}").count());
    if open != close {
        errors.push(format!("Mismatched statement tags: {open} '{{%' vs {close} '%}}'"));
    }

    let (open, close) = (IF_OPEN.find_iter(content).count(), IF_CLOSE.find_iter(content).count());
    if open != close {
        errors.push(format!("Unbalanced if blocks: {open} 'if' vs {close} 'endif'"));
    }

    let (open, close) = (FOR_OPEN.find_iter(content).count(), FOR_CLOSE.find_iter(content).count());
    if open != close {
        errors.push(format!("Unbalanced for loops: {open} 'for' vs {close} 'endfor'"));
    }

    ValidationReport::from_errors(errors)
}
