//! Sample data derived from the variable references in template text.

use std::sync::LazyLock;

use chrono::{SecondsFormat, Utc};
use regex::Regex;
use serde_json::{Map, Value, json};

static VARIABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{-?\s*([^{}]+?)\s*-?\}\}").expect("variable pattern must be valid")
});
static SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("segment pattern must be valid")
});

/// Placeholder used when a leaf name matches no rule.
pub const DEFAULT_PLACEHOLDER: &str = "Sample Value";

/// Kind of canned value a rule produces.
#[derive(Debug, Clone, Copy)]
enum Canned {
    Email,
    Phone,
    PersonName,
    Money,
    Timestamp,
    Link,
    Quantity,
}

impl Canned {
    fn value(self) -> Value {
        match self {
            Canned::Email => json!("john.doe@example.com"),
            Canned::Phone => json!("+1-555-0100"),
            Canned::PersonName => json!("John Doe"),
            Canned::Money => json!(99.99),
            Canned::Timestamp => json!(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            Canned::Link => json!("https://example.com"),
            Canned::Quantity => json!(3),
        }
    }
}

/// Checked in order; the first rule with a keyword contained in the leaf wins.
const RULES: &[(&[&str], Canned)] = &[
    (&["email"], Canned::Email),
    (&["phone"], Canned::Phone),
    (&["name"], Canned::PersonName),
    (&["price", "cost", "amount"], Canned::Money),
    (&["date"], Canned::Timestamp),
    (&["url", "link"], Canned::Link),
    (&["count", "quantity"], Canned::Quantity),
];

fn value_for_leaf(leaf: &str) -> Value {
    let leaf = leaf.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| leaf.contains(k)))
        .map(|(_, canned)| canned.value())
        .unwrap_or_else(|| json!(DEFAULT_PLACEHOLDER))
}

/// Fixture returned when the text has no `object.field` references.
pub fn default_fixture() -> Value {
    json!({
        "name": "John Doe",
        "email": "john.doe@example.com",
        "company": "Acme Corp",
        "items": [
            { "name": "Item 1", "price": 19.99, "quantity": 2 }
        ],
        "total": 39.98
    })
}

/// Path of a `{{ object.field | filter }}` reference, if it has two segments.
fn reference_path(expression: &str) -> Option<(&str, &str)> {
    let path = expression.split('|').next()?.trim();
    let mut segments = path.split('.').map(str::trim);
    let object = segments.next()?;
    let field = segments.next()?;
    (SEGMENT.is_match(object) && SEGMENT.is_match(field)).then_some((object, field))
}

/// Build a JSON object from the double-brace references in `content`.
///
/// `{{ user.email }}` becomes `{"user": {"email": <canned email>}}`. Deeper
/// paths are cut at the second segment. Without any usable reference the
/// [`default_fixture`] is returned, never an empty object.
pub fn synthesize(content: &str) -> Value {
    let mut root = Map::new();

    for captures in VARIABLE_REF.captures_iter(content) {
        let Some((object, field)) = reference_path(&captures[1]) else {
            continue;
        };
        let entry = root.entry(object.to_string()).or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(fields) = entry {
            fields.entry(field.to_string()).or_insert_with(|| value_for_leaf(field));
        }
    }

    if root.is_empty() { default_fixture() } else { Value::Object(root) }
}
